use axum::{Json, extract::State};
use serde::Deserialize;

use crate::domain::types::Purpose;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::challenge::{
    IssueChallengeInput, IssueChallengeUseCase, VerifyChallengeInput, VerifyChallengeUseCase,
};

use super::MessageResponse;

// ── POST /otp/request ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestOtpRequest {
    pub email: String,
    pub purpose: String,
}

pub async fn request_otp(
    State(state): State<AppState>,
    Json(body): Json<RequestOtpRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let purpose = Purpose::parse(&body.purpose).ok_or(AccountsServiceError::InvalidPurpose)?;
    let usecase = IssueChallengeUseCase {
        accounts: state.account_repo(),
        challenges: state.challenge_repo(),
        mailer: state.mailer(),
        clock: state.clock(),
    };
    usecase
        .execute(IssueChallengeInput {
            email: body.email,
            purpose,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "passcode sent",
    }))
}

// ── POST /otp/verify ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub passcode: String,
    pub purpose: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let purpose = Purpose::parse(&body.purpose).ok_or(AccountsServiceError::InvalidPurpose)?;
    let usecase = VerifyChallengeUseCase {
        challenges: state.challenge_repo(),
        clock: state.clock(),
    };
    usecase
        .execute(VerifyChallengeInput {
            email: body.email,
            passcode: body.passcode,
            purpose,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "passcode verified",
    }))
}
