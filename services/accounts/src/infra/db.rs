use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionError, TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use aurum_accounts_schema::{accounts, challenges};

use crate::domain::repository::{AccountRepository, ChallengeRepository};
use crate::domain::types::{Account, Challenge, Purpose};
use crate::error::AccountsServiceError;

/// Store I/O failures that are not domain outcomes are reported as
/// retryable. Raw `DbErr` never crosses out of this module.
fn transient(err: DbErr, context: &'static str) -> AccountsServiceError {
    AccountsServiceError::Transient(anyhow::Error::new(err).context(context))
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| transient(e, "find account by email"))?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| transient(e, "find account by id"))?;
        Ok(model.map(account_from_model))
    }

    async fn create_consuming_challenge(
        &self,
        account: &Account,
        purpose: Purpose,
    ) -> Result<(), AccountsServiceError> {
        let result = self
            .db
            .transaction::<_, (), DbErr>(|txn| {
                let account = account.clone();
                Box::pin(async move {
                    accounts::ActiveModel {
                        id: Set(account.id),
                        email: Set(account.email.clone()),
                        full_name: Set(account.full_name.clone()),
                        password_hash: Set(account.password_hash.clone()),
                        created_at: Set(account.created_at),
                    }
                    .insert(txn)
                    .await?;

                    challenges::Entity::delete_many()
                        .filter(challenges::Column::Email.eq(account.email.clone()))
                        .filter(challenges::Column::Purpose.eq(purpose.as_str()))
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await;

        match result {
            Ok(()) => Ok(()),
            // Unique violation on accounts.email: a concurrent registration won.
            Err(TransactionError::Transaction(e))
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(AccountsServiceError::AccountExists)
            }
            Err(TransactionError::Transaction(e)) => Err(transient(e, "create account")),
            Err(TransactionError::Connection(e)) => Err(transient(e, "create account")),
        }
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => AccountsServiceError::AccountNotFound,
            e => transient(e, "update password hash"),
        })?;
        Ok(())
    }

    async fn update_full_name(
        &self,
        id: Uuid,
        full_name: &str,
    ) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            full_name: Set(full_name.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => AccountsServiceError::AccountNotFound,
            e => transient(e, "update full name"),
        })?;
        Ok(())
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

// ── Challenge repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbChallengeRepository {
    pub db: DatabaseConnection,
}

impl ChallengeRepository for DbChallengeRepository {
    async fn upsert(&self, challenge: &Challenge) -> Result<(), AccountsServiceError> {
        let row = challenges::ActiveModel {
            email: Set(challenge.email.clone()),
            purpose: Set(challenge.purpose.as_str().to_owned()),
            passcode: Set(challenge.passcode.clone()),
            expires_at: Set(challenge.expires_at),
            verified: Set(challenge.verified),
            created_at: Set(challenge.created_at),
        };
        challenges::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([challenges::Column::Email, challenges::Column::Purpose])
                    .update_columns([
                        challenges::Column::Passcode,
                        challenges::Column::ExpiresAt,
                        challenges::Column::Verified,
                        challenges::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| transient(e, "upsert challenge"))?;
        Ok(())
    }

    async fn find(
        &self,
        email: &str,
        purpose: Purpose,
    ) -> Result<Option<Challenge>, AccountsServiceError> {
        let model = challenges::Entity::find_by_id((email.to_owned(), purpose.as_str().to_owned()))
            .one(&self.db)
            .await
            .map_err(|e| transient(e, "find challenge"))?;
        Ok(model.map(|m| challenge_from_model(m, purpose)))
    }

    async fn mark_verified(
        &self,
        email: &str,
        purpose: Purpose,
        passcode: &str,
    ) -> Result<(), AccountsServiceError> {
        use sea_orm::sea_query::Expr;

        // The passcode filter keeps this write off a challenge re-issued
        // between the caller's read and now.
        let result = challenges::Entity::update_many()
            .filter(challenges::Column::Email.eq(email))
            .filter(challenges::Column::Purpose.eq(purpose.as_str()))
            .filter(challenges::Column::Passcode.eq(passcode))
            .col_expr(challenges::Column::Verified, Expr::value(true))
            .exec(&self.db)
            .await
            .map_err(|e| transient(e, "mark challenge verified"))?;
        if result.rows_affected == 0 {
            return Err(AccountsServiceError::ChallengeNotFound);
        }
        Ok(())
    }

    async fn delete(&self, email: &str, purpose: Purpose) -> Result<(), AccountsServiceError> {
        challenges::Entity::delete_many()
            .filter(challenges::Column::Email.eq(email))
            .filter(challenges::Column::Purpose.eq(purpose.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| transient(e, "delete challenge"))?;
        Ok(())
    }
}

/// The purpose column is the lookup key, so the caller's parsed value is
/// carried through instead of re-parsing the stored string.
fn challenge_from_model(model: challenges::Model, purpose: Purpose) -> Challenge {
    Challenge {
        email: model.email,
        purpose,
        passcode: model.passcode,
        expires_at: model.expires_at,
        verified: model.verified,
        created_at: model.created_at,
    }
}
