//! Catalog error to HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use flyhorizons_core::catalog::{catalog_error_to_status_code, CatalogError};

/// Renders a catalog error as `{"message": ...}` with its mapped status.
pub(super) fn catalog_error_response(error: &CatalogError) -> Response {
    let status = StatusCode::from_u16(catalog_error_to_status_code(error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "message": error.to_string() }))).into_response()
}

/// Renders an arbitrary message as `{"message": ...}`.
pub(super) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_renders_409() {
        let response = catalog_error_response(&CatalogError::Conflict("FR789".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_renders_404() {
        let response = catalog_error_response(&CatalogError::NotFound("FR789".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
