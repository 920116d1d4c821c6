use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use aurum_core::health::{healthz, readyz};
use aurum_core::middleware::request_id_layer;

use crate::handlers::{
    otp::{request_otp, verify_otp},
    user::{get_profile, login, register, reset_password, update_password, update_profile},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP challenges
        .route("/otp/request", post(request_otp))
        .route("/otp/verify", post(verify_otp))
        // Accounts
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/reset-password", post(reset_password))
        .route("/users/profile", get(get_profile))
        .route("/users/update-password", put(update_password))
        .route("/users/profile/update", put(update_profile))
        // Request-id sits outside the trace layer so the id is set when
        // the request span opens.
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
