use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness probe, always 200 while the
/// process is serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness probe. Answers 200 once the
/// router is up; services with external dependencies may mount their
/// own stricter variant instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
