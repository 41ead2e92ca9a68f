mod convert;
mod error;
mod filter;
mod types;
mod weekday;

pub use convert::{flight_to_record, record_to_flight};
pub use error::DayDecodeError;
pub use filter::{
    ArrivalAirportStage, DepartureAirportStage, FilterStage, FlightFilter, SearchCriteria,
    WeekdayWindowStage,
};
pub use types::{Flight, FlightRecord};
pub use weekday::{contains_day, decode_days, encode_days, Weekday};
