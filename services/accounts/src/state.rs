use sea_orm::DatabaseConnection;

use crate::infra::clock::SystemClock;
use crate::infra::db::{DbAccountRepository, DbChallengeRepository};
use crate::infra::mailer::HttpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: HttpMailer,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn challenge_repo(&self) -> DbChallengeRepository {
        DbChallengeRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> HttpMailer {
        self.mailer.clone()
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }
}
