use uuid::Uuid;

use crate::domain::repository::{AccountRepository, ChallengeRepository, Clock};
use crate::domain::types::{Purpose, normalize_email};
use crate::error::AccountsServiceError;

/// Conjunctive strength policy: at least 8 characters, one uppercase, one
/// lowercase, one digit, one symbol.
pub fn meets_strength_policy(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub email: String,
    pub password: String,
}

pub struct ResetPasswordUseCase<A, C, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    K: Clock,
{
    pub accounts: A,
    pub challenges: C,
    pub clock: K,
    pub bcrypt_cost: u32,
}

impl<A, C, K> ResetPasswordUseCase<A, C, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    K: Clock,
{
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), AccountsServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty() || input.password.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        // 1. Find account by email → 404 if not registered
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        // 2. Gate on a verified, unexpired forgot-password challenge → PRECONDITION
        let now = self.clock.now();
        let verified = self
            .challenges
            .find(&email, Purpose::ForgotPassword)
            .await?
            .is_some_and(|c| c.verified && !c.is_expired(now));
        if !verified {
            return Err(AccountsServiceError::ChallengeNotVerified);
        }

        // 3. Store the new hash
        let password_hash = bcrypt::hash(&input.password, self.bcrypt_cost)
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        self.accounts
            .update_password_hash(account.id, &password_hash)
            .await?;

        // 4. Consume the challenge so the verified state cannot authorize a
        //    second reset
        self.challenges.delete(&email, Purpose::ForgotPassword).await
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<A: AccountRepository> {
    pub accounts: A,
    pub bcrypt_cost: u32,
}

impl<A: AccountRepository> ChangePasswordUseCase<A> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), AccountsServiceError> {
        if input.current_password.is_empty() || input.new_password.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        let matches = bcrypt::verify(&input.current_password, &account.password_hash)
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        if !matches {
            return Err(AccountsServiceError::WrongPassword);
        }

        if !meets_strength_policy(&input.new_password) {
            return Err(AccountsServiceError::WeakPassword);
        }

        let password_hash = bcrypt::hash(&input.new_password, self.bcrypt_cost)
            .map_err(|e| AccountsServiceError::Internal(e.into()))?;
        self.accounts
            .update_password_hash(account.id, &password_hash)
            .await
    }
}
