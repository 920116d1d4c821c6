use chrono::Duration;
use rand::RngExt;

use crate::domain::repository::{AccountRepository, ChallengeRepository, Clock, Mailer};
use crate::domain::types::{Challenge, PASSCODE_LEN, PASSCODE_TTL_SECS, Purpose, normalize_email};
use crate::error::AccountsServiceError;

/// Charset for generating passcodes. Digits only, so leading zeros occur.
const CHARSET: &[u8] = b"0123456789";

fn generate_passcode() -> String {
    let mut rng = rand::rng();
    (0..PASSCODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── IssueChallenge ───────────────────────────────────────────────────────────

pub struct IssueChallengeInput {
    pub email: String,
    pub purpose: Purpose,
}

pub struct IssueChallengeUseCase<A, C, M, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    M: Mailer,
    K: Clock,
{
    pub accounts: A,
    pub challenges: C,
    pub mailer: M,
    pub clock: K,
}

impl<A, C, M, K> IssueChallengeUseCase<A, C, M, K>
where
    A: AccountRepository,
    C: ChallengeRepository,
    M: Mailer,
    K: Clock,
{
    pub async fn execute(&self, input: IssueChallengeInput) -> Result<(), AccountsServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        // 1. Purpose gate → register needs the email unclaimed, forgot-password claimed
        let account = self.accounts.find_by_email(&email).await?;
        match input.purpose {
            Purpose::Register if account.is_some() => {
                return Err(AccountsServiceError::AccountExists);
            }
            Purpose::ForgotPassword if account.is_none() => {
                return Err(AccountsServiceError::EmailNotRegistered);
            }
            _ => {}
        }

        // 2. Generate passcode + challenge record
        let passcode = generate_passcode();
        let now = self.clock.now();
        let challenge = Challenge {
            email: email.clone(),
            purpose: input.purpose,
            passcode: passcode.clone(),
            expires_at: now + Duration::seconds(PASSCODE_TTL_SECS),
            verified: false,
            created_at: now,
        };

        // 3. Upsert supersedes any prior challenge for the (email, purpose) pair
        self.challenges.upsert(&challenge).await?;

        // 4. Deliver by mail; a failure here is retryable and a retry issues a
        //    fresh passcode
        let body = format!("Your one-time passcode is {passcode}. It expires in 5 minutes.");
        self.mailer
            .send(&email, "Your one-time passcode", &body)
            .await?;
        Ok(())
    }
}

// ── VerifyChallenge ──────────────────────────────────────────────────────────

pub struct VerifyChallengeInput {
    pub email: String,
    pub passcode: String,
    pub purpose: Purpose,
}

pub struct VerifyChallengeUseCase<C, K>
where
    C: ChallengeRepository,
    K: Clock,
{
    pub challenges: C,
    pub clock: K,
}

impl<C, K> VerifyChallengeUseCase<C, K>
where
    C: ChallengeRepository,
    K: Clock,
{
    pub async fn execute(&self, input: VerifyChallengeInput) -> Result<(), AccountsServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty() || input.passcode.is_empty() {
            return Err(AccountsServiceError::MissingFields);
        }

        // 1. Find the live challenge for (email, purpose) → NOT_FOUND if none
        let challenge = self
            .challenges
            .find(&email, input.purpose)
            .await?
            .ok_or(AccountsServiceError::ChallengeNotFound)?;

        // 2. Expiry before passcode compare: an expired-but-correct passcode
        //    reports EXPIRED, never MISMATCH
        if challenge.is_expired(self.clock.now()) {
            return Err(AccountsServiceError::ChallengeExpired);
        }
        if challenge.passcode != input.passcode {
            return Err(AccountsServiceError::PasscodeMismatch);
        }

        // 3. Mark verified, keyed on the passcode just checked so a challenge
        //    re-issued since the read is not marked. The row is retained for
        //    the gated operation to consume; re-verify is idempotent and
        //    never extends the expiry.
        self.challenges
            .mark_verified(&email, input.purpose, &challenge.passcode)
            .await
    }
}
