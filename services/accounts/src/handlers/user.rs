use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::AccountsServiceError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::account::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::usecase::password::{
    ChangePasswordInput, ChangePasswordUseCase, ResetPasswordInput, ResetPasswordUseCase,
};
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};

use super::MessageResponse;

// ── POST /users/register ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AccountsServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        challenges: state.challenge_repo(),
        clock: state.clock(),
        jwt_secret: state.jwt_secret.clone(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let out = usecase
        .execute(RegisterInput {
            full_name: body.full_name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(RegisterResponse {
        message: "registration successful",
        token: out.token,
    }))
}

// ── POST /users/login ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: AccountSummary,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountsServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        message: "login successful",
        token: out.token,
        user: AccountSummary {
            id: out.account.id.to_string(),
            full_name: out.account.full_name,
            email: out.account.email,
        },
    }))
}

// ── POST /users/reset-password ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = ResetPasswordUseCase {
        accounts: state.account_repo(),
        challenges: state.challenge_repo(),
        clock: state.clock(),
        bcrypt_cost: state.bcrypt_cost,
    };
    usecase
        .execute(ResetPasswordInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "password reset",
    }))
}

// ── GET /users/profile ───────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(serialize_with = "aurum_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: ProfileBody,
}

pub async fn get_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let usecase = GetProfileUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(identity.account_id).await?;
    Ok(Json(ProfileResponse {
        user: ProfileBody {
            id: account.id.to_string(),
            full_name: account.full_name,
            email: account.email,
            created_at: account.created_at,
        },
    }))
}

// ── PUT /users/update-password ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn update_password(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = ChangePasswordUseCase {
        accounts: state.account_repo(),
        bcrypt_cost: state.bcrypt_cost,
    };
    usecase
        .execute(
            identity.account_id,
            ChangePasswordInput {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "password updated",
    }))
}

// ── PUT /users/profile/update ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
}

pub async fn update_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = UpdateProfileUseCase {
        accounts: state.account_repo(),
    };
    usecase
        .execute(
            identity.account_id,
            UpdateProfileInput {
                full_name: body.full_name,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "profile updated",
    }))
}
