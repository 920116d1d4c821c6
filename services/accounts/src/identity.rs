//! Bearer session-token extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::token::validate_session_token;

/// Authenticated caller, extracted from `Authorization: Bearer <token>`.
///
/// Rejects with 401 AUTHENTICATION when the header is absent, not a bearer
/// scheme, or the token fails signature/expiry validation.
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: Uuid,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AccountsServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_owned());
        let secret = state.jwt_secret.clone();

        async move {
            let token = token.ok_or(AccountsServiceError::InvalidToken)?;
            let account_id = validate_session_token(&token, &secret)?;
            Ok(Self { account_id })
        }
    }
}
