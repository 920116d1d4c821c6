use uuid::Uuid;

use crate::domain::repository::{AccountRepository, ChallengeRepository, Clock};
use crate::domain::types::{Account, Purpose, normalize_email};
use crate::error::AccountsServiceError;
use crate::usecase::token::issue_session_token;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub account_id: Uuid,
    pub token: String,
}

pub struct RegisterUseCase<A, C, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    K: Clock,
{
    pub accounts: A,
    pub challenges: C,
    pub clock: K,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl<A, C, K> RegisterUseCase<A, C, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    K: Clock,
{
    pub async fn execute(
        &self,
        input: RegisterInput,
    ) -> Result<RegisterOutput, AccountsServiceError> {
        let email = normalize_email(&input.email);
        let full_name = input.full_name.trim();
        if full_name.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        // 1. Conflict before challenge state → a claimed email reports
        //    CONFLICT regardless of any pending challenge
        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(AccountsServiceError::AccountExists);
        }

        // 2. Gate on a verified, unexpired register challenge → PRECONDITION
        let now = self.clock.now();
        let verified = self
            .challenges
            .find(&email, Purpose::Register)
            .await?
            .is_some_and(|c| c.verified && !c.is_expired(now));
        if !verified {
            return Err(AccountsServiceError::ChallengeNotVerified);
        }

        // 3. Hash password + build account record
        let password_hash = bcrypt::hash(&input.password, self.bcrypt_cost)
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        let account = Account {
            id: Uuid::now_v7(),
            email,
            full_name: full_name.to_owned(),
            password_hash,
            created_at: now,
        };

        // 4. Insert + challenge consumption in one transaction; a lost race
        //    on the email unique constraint surfaces as AccountExists
        self.accounts
            .create_consuming_challenge(&account, Purpose::Register)
            .await?;

        let token = issue_session_token(account.id, &self.jwt_secret)?;
        Ok(RegisterOutput {
            account_id: account.id,
            token,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub account: Account,
    pub token: String,
}

pub struct LoginUseCase<A: AccountRepository> {
    pub accounts: A,
    pub jwt_secret: String,
}

impl<A: AccountRepository> LoginUseCase<A> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountsServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty() || input.password.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        let matches = bcrypt::verify(&input.password, &account.password_hash)
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        if !matches {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        let token = issue_session_token(account.id, &self.jwt_secret)?;
        Ok(LoginOutput { account, token })
    }
}
