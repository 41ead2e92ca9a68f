//! Liveness and readiness probes.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /livez
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
