//! Composable filter pipeline for narrowing flight listings.
//!
//! Each [`FilterStage`] is a pure subset filter; the pipeline threads the
//! flight list through its stages in registration order, producing an
//! AND-composed narrowing.
//!
//! Contract: a stage invoked without its relevant criterion returns the
//! **empty** collection, not the untouched input. Stages are meant to be
//! registered only when their criterion is present; registering one
//! unconditionally silently zeroes the result.

use chrono::{DateTime, Utc};

use super::types::Flight;
use super::weekday::{contains_day, Weekday};

/// The optional search criteria a caller may narrow a listing by.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_date: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
}

/// One predicate in the filter pipeline.
pub trait FilterStage: Send + Sync {
    /// Narrows `flights` by this stage's criterion in `criteria`.
    fn apply(&self, flights: Vec<Flight>, criteria: &SearchCriteria) -> Vec<Flight>;
}

/// Keeps flights whose arrival code equals the requested airport,
/// exact and case-sensitive.
pub struct ArrivalAirportStage;

impl FilterStage for ArrivalAirportStage {
    fn apply(&self, flights: Vec<Flight>, criteria: &SearchCriteria) -> Vec<Flight> {
        match &criteria.arrival_airport {
            Some(arrival) => flights
                .into_iter()
                .filter(|flight| flight.arrival == *arrival)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Keeps flights whose departure code equals the requested airport,
/// exact and case-sensitive.
pub struct DepartureAirportStage;

impl FilterStage for DepartureAirportStage {
    fn apply(&self, flights: Vec<Flight>, criteria: &SearchCriteria) -> Vec<Flight> {
        match &criteria.departure_airport {
            Some(departure) => flights
                .into_iter()
                .filter(|flight| flight.departure == *departure)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Keeps flights that recur on the departure date's weekday.
///
/// When a return date is also given, the flight is kept only if the return
/// date falls on the *same* weekday: flights are weekly-recurring, so a
/// round trip is only offered on the weekday it departs on. A date pair
/// spanning different weekdays therefore yields zero matches.
pub struct WeekdayWindowStage;

impl FilterStage for WeekdayWindowStage {
    fn apply(&self, flights: Vec<Flight>, criteria: &SearchCriteria) -> Vec<Flight> {
        let Some(departure_date) = criteria.departure_date else {
            return Vec::new();
        };

        let departure_day = Weekday::from_datetime(departure_date);
        let return_day = criteria.return_date.map(Weekday::from_datetime);

        flights
            .into_iter()
            .filter(|flight| contains_day(&flight.departure_days, departure_day))
            .filter(|_| return_day.is_none_or(|r| r == departure_day))
            .collect()
    }
}

/// An ordered pipeline of filter stages.
#[derive(Default)]
pub struct FlightFilter {
    stages: Vec<Box<dyn FilterStage>>,
}

impl FlightFilter {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Registers a stage at the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn FilterStage>) {
        self.stages.push(stage);
    }

    /// Threads the flight list through the stages in registration order.
    pub fn filter(&self, mut flights: Vec<Flight>, criteria: &SearchCriteria) -> Vec<Flight> {
        for stage in &self.stages {
            flights = stage.apply(flights, criteria);
        }
        flights
    }
}
