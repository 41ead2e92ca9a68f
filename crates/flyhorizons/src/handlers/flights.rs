//! CRUD handlers for flights.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use flyhorizons_core::flight::Flight;

use crate::state::AppState;

use super::error::{catalog_error_response, message_response};

/// GET /flights
pub async fn list_flights(State(state): State<AppState>) -> Response {
    match state.catalog.get_all().await {
        Ok(flights) => (StatusCode::OK, Json(flights)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list flights");
            catalog_error_response(&e)
        }
    }
}

/// GET /flights/{flight_code}
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_code): Path<String>,
) -> Response {
    match state.catalog.get_by_code(&flight_code).await {
        Ok(flight) => (StatusCode::OK, Json(flight)).into_response(),
        Err(e) => catalog_error_response(&e),
    }
}

/// POST /flights
pub async fn create_flight(
    State(state): State<AppState>,
    Json(flight): Json<Flight>,
) -> Response {
    match state.catalog.create(&flight).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => catalog_error_response(&e),
    }
}

/// PUT /flights
pub async fn update_flight(
    State(state): State<AppState>,
    Json(flight): Json<Flight>,
) -> Response {
    match state.catalog.update(&flight).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => catalog_error_response(&e),
    }
}

/// DELETE /flights/{flight_code}
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(flight_code): Path<String>,
) -> Response {
    match state.catalog.delete_by_code(&flight_code).await {
        Ok(true) => message_response(StatusCode::OK, "Flight deleted successfully"),
        // The repository reported nothing removed yet raised no error. Kept
        // as an explicit 500 so the inconsistency is visible to callers.
        Ok(false) => message_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to delete flight, but no error has occurred",
        ),
        Err(e) => catalog_error_response(&e),
    }
}
