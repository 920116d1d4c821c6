use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("all fields are required")]
    MissingFields,
    #[error("invalid purpose")]
    InvalidPurpose,
    #[error("password does not meet the strength policy")]
    WeakPassword,
    #[error("full name must not be empty")]
    EmptyName,
    #[error("account already exists")]
    AccountExists,
    #[error("email not registered")]
    EmailNotRegistered,
    #[error("account not found")]
    AccountNotFound,
    #[error("challenge not found")]
    ChallengeNotFound,
    #[error("challenge not verified")]
    ChallengeNotVerified,
    #[error("challenge expired")]
    ChallengeExpired,
    #[error("incorrect passcode")]
    PasscodeMismatch,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("current password is incorrect")]
    WrongPassword,
    #[error("invalid token")]
    InvalidToken,
    #[error("service temporarily unavailable")]
    Transient(anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields | Self::InvalidPurpose | Self::WeakPassword | Self::EmptyName => {
                "VALIDATION"
            }
            Self::AccountExists => "CONFLICT",
            Self::EmailNotRegistered | Self::AccountNotFound | Self::ChallengeNotFound => {
                "NOT_FOUND"
            }
            Self::ChallengeNotVerified => "PRECONDITION",
            Self::ChallengeExpired => "EXPIRED",
            Self::PasscodeMismatch => "MISMATCH",
            Self::InvalidCredentials | Self::WrongPassword | Self::InvalidToken => "AUTHENTICATION",
            Self::Transient(_) => "TRANSIENT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFields
            | Self::InvalidPurpose
            | Self::WeakPassword
            | Self::EmptyName
            | Self::AccountExists
            | Self::EmailNotRegistered
            | Self::ChallengeNotFound
            | Self::ChallengeNotVerified
            | Self::ChallengeExpired
            | Self::PasscodeMismatch
            | Self::InvalidCredentials
            | Self::WrongPassword => StatusCode::BAD_REQUEST,
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Server errors need the anyhow chain logged so the root cause is traceable.
        match &self {
            Self::Transient(e) => tracing::warn!(error = %e, kind = "TRANSIENT", "dependency failure"),
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
