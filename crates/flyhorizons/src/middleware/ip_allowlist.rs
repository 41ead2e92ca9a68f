//! IP allowlist middleware for write-restricted routes.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// Rejects requests whose client IP is not on the configured allowlist.
///
/// The client IP is the first entry of `X-Forwarded-For` when the header is
/// present, otherwise the peer address. The header is trusted as-is, so this
/// only holds up behind a proxy that overwrites it.
pub async fn require_allowlisted_ip(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(ip) = client_ip(&request) else {
        tracing::warn!("rejecting request with no resolvable client IP");
        return forbidden();
    };

    if !state.ip_allowlist.iter().any(|allowed| allowed == &ip) {
        tracing::warn!(ip = %ip, "rejecting request from non-allowlisted IP");
        return forbidden();
    }

    next.run(request).await
}

fn client_ip(request: &Request) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "IP address not allowed" })),
    )
        .into_response()
}
