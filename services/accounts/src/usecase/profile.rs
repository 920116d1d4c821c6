use uuid::Uuid;

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::AccountsServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> GetProfileUseCase<A> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, AccountsServiceError> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: String,
}

pub struct UpdateProfileUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> UpdateProfileUseCase<A> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), AccountsServiceError> {
        let full_name = input.full_name.trim();
        if full_name.is_empty() {
            return Err(AccountsServiceError::EmptyName);
        }
        self.accounts.update_full_name(account_id, full_name).await
    }
}
