//! Router assembly.

use std::time::Duration;

use axum::{
    http::{Method, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::require_allowlisted_ip;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the application router.
///
/// Only flight creation sits behind the IP allowlist; the rest of the
/// surface is open.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    let guarded = Router::new()
        .route("/flights", post(handlers::create_flight))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_allowlisted_ip,
        ));

    Router::new()
        .route(
            "/flights",
            get(handlers::list_flights).put(handlers::update_flight),
        )
        .route("/flights/filter", get(handlers::filter_flights))
        .route(
            "/flights/{flight_code}",
            get(handlers::get_flight).delete(handlers::delete_flight),
        )
        .merge(guarded)
        .route("/livez", get(handlers::livez))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(cors)
        .with_state(state)
}
