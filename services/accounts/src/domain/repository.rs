#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{Account, Challenge, Purpose};
use crate::error::AccountsServiceError;

/// Repository for registered accounts.
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError>;

    /// Insert the account and delete its gating challenge in one transaction.
    /// A unique violation on the email column surfaces as `AccountExists`:
    /// that is how a lost registration race is reported.
    async fn create_consuming_challenge(
        &self,
        account: &Account,
        purpose: Purpose,
    ) -> Result<(), AccountsServiceError>;

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError>;

    async fn update_full_name(&self, id: Uuid, full_name: &str)
    -> Result<(), AccountsServiceError>;
}

/// Repository for one-time passcode challenges.
pub trait ChallengeRepository: Send + Sync {
    /// Atomic insert-or-replace keyed by (email, purpose). Never read-then-write.
    async fn upsert(&self, challenge: &Challenge) -> Result<(), AccountsServiceError>;

    /// Plain lookup; expiry is the caller's lazy check, not a query filter.
    async fn find(
        &self,
        email: &str,
        purpose: Purpose,
    ) -> Result<Option<Challenge>, AccountsServiceError>;

    /// Sets `verified = true` on the row whose passcode still matches, so a
    /// challenge re-issued since the caller's read is not marked. Zero rows
    /// is `ChallengeNotFound`. Must not touch `expires_at`.
    async fn mark_verified(
        &self,
        email: &str,
        purpose: Purpose,
        passcode: &str,
    ) -> Result<(), AccountsServiceError>;

    /// Consume the challenge. Deleting an absent row is a success.
    async fn delete(&self, email: &str, purpose: Purpose) -> Result<(), AccountsServiceError>;
}

/// Outbound passcode delivery.
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str)
    -> Result<(), AccountsServiceError>;
}

/// Time source, injectable so expiry is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
