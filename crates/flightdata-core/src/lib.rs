//! Core library for querying a historical flight delay dataset.
//!
//! The crate turns typed query parameters into parameterized SQL against a
//! read-only SQLite store, normalizes the result rows into a fixed record
//! shape, and keeps persistence failures from reaching callers that only want
//! rows.
//!
//! # Layers
//!
//! - [`catalog`]: the fixed set of named SQL templates
//! - [`db`]: the connection manager and column-name-keyed rows
//! - [`executor`]: parameter checking, execution and the fail-soft boundary
//! - [`normalize`]: raw rows to [`FlightRecord`]s, with the delay policy
//! - [`flights`]: the [`FlightData`] facade with one method per query
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flightdata_core::{params::FlightsByDate, FlightDataBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut data = FlightDataBuilder::new()
//!     .with_database_uri(Some("sqlite:///data/flights.sqlite3"))
//!     .build()?;
//!
//! let flights = data.flights_by_date(&FlightsByDate { day: 1, month: 1, year: 2015 });
//! println!("{} flights", flights.len());
//!
//! for airline in data.delay_percentage_by_airline() {
//!     println!("{airline}");
//! }
//!
//! data.close();
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod executor;
pub mod flights;
pub mod models;
pub mod normalize;
pub mod params;

// Re-export commonly used types
pub use catalog::QueryName;
pub use db::{Database, RawRow};
pub use display::{Aggregates, Flights};
pub use error::{ErrorKind, FlightDataError, Result};
pub use executor::{ErrorReporter, Executor, LogReporter};
pub use flights::{FlightData, FlightDataBuilder};
pub use models::{
    AirlineDelay, Coordinates, DelayStats, FlightRecord, HourlyDelay, RouteDelay,
    RouteDelayWithCoordinates,
};
pub use params::{ByAirline, ByAirport, FlightById, FlightsByDate, QueryParams};
