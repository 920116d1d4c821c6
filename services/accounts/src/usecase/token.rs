use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::AccountsServiceError;

/// Session token lifetime in seconds (7 days).
pub const SESSION_TOKEN_EXP_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims for session tokens. `sub` is the account id.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_session_token(
    account_id: Uuid,
    secret: &str,
) -> Result<String, AccountsServiceError> {
    let claims = SessionClaims {
        sub: account_id.to_string(),
        exp: now_secs() + SESSION_TOKEN_EXP_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccountsServiceError::Internal(e.into()))
}

/// Validate a session token (signature + expiry) and return the account id.
pub fn validate_session_token(token: &str, secret: &str) -> Result<Uuid, AccountsServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AccountsServiceError::InvalidToken)?;

    data.claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AccountsServiceError::InvalidToken)
}
