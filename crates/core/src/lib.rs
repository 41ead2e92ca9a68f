//! Core domain types and trait seams for the FlyHorizons flight catalog.
//!
//! Following the Functional Core pattern, this crate holds pure data types
//! and logic plus the trait seams (`Cache`, `FlightRepository`) that the
//! service crate implements with real backends. No I/O happens here.

pub mod cache;
pub mod catalog;
pub mod flight;
pub mod storage;
