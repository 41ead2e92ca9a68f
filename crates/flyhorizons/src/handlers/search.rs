//! Filtered flight search.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use flyhorizons_core::flight::{
    ArrivalAirportStage, DepartureAirportStage, FlightFilter, SearchCriteria, WeekdayWindowStage,
};

use crate::state::AppState;

use super::error::{catalog_error_response, message_response};

/// Query parameters for GET /flights/filter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    departure_airport: Option<String>,
    arrival_airport: Option<String>,
    departure_date: Option<String>,
    return_date: Option<String>,
}

/// GET /flights/filter
///
/// Stages are only registered for criteria the caller supplied; dates that
/// fail to parse as `YYYY-MM-DD` are ignored as if absent.
pub async fn filter_flights(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Response {
    let criteria = SearchCriteria {
        departure_airport: params.departure_airport.clone(),
        arrival_airport: params.arrival_airport.clone(),
        departure_date: params.departure_date.as_deref().and_then(parse_date),
        return_date: params.return_date.as_deref().and_then(parse_date),
    };

    let mut filter = FlightFilter::new();
    if criteria.departure_airport.is_some() {
        filter.add_stage(Box::new(DepartureAirportStage));
    }
    if criteria.arrival_airport.is_some() {
        filter.add_stage(Box::new(ArrivalAirportStage));
    }
    // Either date parameter activates the window stage. A return date alone
    // still registers it, and the stage then zeroes the result for lack of a
    // departure date; that asymmetry is part of the observable contract.
    if criteria.departure_date.is_some() || criteria.return_date.is_some() {
        filter.add_stage(Box::new(WeekdayWindowStage));
    }

    let flights = match state.catalog.get_all().await {
        Ok(flights) => flights,
        Err(e) => {
            tracing::error!(error = %e, "failed to load flights for filtering");
            return catalog_error_response(&e);
        }
    };

    let matches = filter.filter(flights, &criteria);
    if matches.is_empty() {
        return message_response(
            StatusCode::NOT_FOUND,
            "No flights found matching the criteria",
        );
    }

    (StatusCode::OK, Json(matches)).into_response()
}

fn parse_date(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
