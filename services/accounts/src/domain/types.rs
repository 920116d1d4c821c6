use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered account owned by the accounts service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// bcrypt PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// What a one-time passcode challenge gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Register,
    ForgotPassword,
}

impl Purpose {
    /// Wire and storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::ForgotPassword => "forgot_password",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "register" => Some(Self::Register),
            "forgot_password" => Some(Self::ForgotPassword),
            _ => None,
        }
    }
}

/// One-time passcode challenge for an (email, purpose) pair.
/// At most one exists per pair; re-issuing replaces it.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub email: String,
    pub purpose: Purpose,
    pub passcode: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Expiry is strict: a challenge read at exactly `expires_at` is dead.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Emails are compared and stored lowercase.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Passcode length in digits.
pub const PASSCODE_LEN: usize = 6;

/// Passcode time-to-live in seconds.
pub const PASSCODE_TTL_SECS: i64 = 300;
