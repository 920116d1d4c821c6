use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use aurum_accounts::error::AccountsServiceError;
use aurum_accounts::usecase::token::{
    SessionClaims, issue_session_token, validate_session_token,
};

use crate::helpers::TEST_JWT_SECRET;

fn encode_claims(claims: &SessionClaims, secret: &str) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn should_issue_session_token_that_validates() {
    let account_id = Uuid::now_v7();
    let token = issue_session_token(account_id, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    let subject = validate_session_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(subject, account_id);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let token = issue_session_token(Uuid::now_v7(), "other-secret").unwrap();

    let result = validate_session_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_malformed_token_string() {
    let result = validate_session_token("not-a-jwt", TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_token() {
    // Expired well past the validator's leeway.
    let claims = SessionClaims {
        sub: Uuid::now_v7().to_string(),
        exp: unix_now() - 3600,
    };
    let token = encode_claims(&claims, TEST_JWT_SECRET);

    let result = validate_session_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_token_with_non_uuid_subject() {
    let claims = SessionClaims {
        sub: "not-an-account-id".to_owned(),
        exp: unix_now() + 3600,
    };
    let token = encode_claims(&claims, TEST_JWT_SECRET);

    let result = validate_session_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}
