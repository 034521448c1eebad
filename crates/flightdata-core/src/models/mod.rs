//! Data models for flight query results.
//!
//! - [`FlightRecord`]: one normalized flight row, returned by the four
//!   row-level queries.
//! - [`AirlineDelay`], [`HourlyDelay`], [`RouteDelay`],
//!   [`RouteDelayWithCoordinates`]: grouped delay statistics, returned by the
//!   aggregate queries for charting consumers.
//!
//! Display implementations live in [`crate::display`].

pub mod aggregate;
pub mod flight;

pub use aggregate::{
    AirlineDelay, Coordinates, DelayStats, FromRawRow, HourlyDelay, RouteDelay,
    RouteDelayWithCoordinates,
};
pub use flight::FlightRecord;
