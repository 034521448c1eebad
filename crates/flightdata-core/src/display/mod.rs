//! Display formatting for query results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collection wrappers in [`collections`] add result counts and empty-result
//! messages. Everything formats as markdown so the CLI renderer can style it,
//! while plain output stays readable.
//!
//! ```rust
//! use flightdata_core::{display::Flights, models::FlightRecord};
//!
//! let flights = Flights(vec![FlightRecord {
//!     id: 1,
//!     origin_airport: "JFK".to_string(),
//!     destination_airport: "LAX".to_string(),
//!     airline: "Delta".to_string(),
//!     delay: 15,
//! }]);
//! let output = flights.to_string();
//! assert!(output.contains("Got 1 results."));
//! assert!(output.contains("JFK -> LAX by *Delta*, Delay: 15 Minutes"));
//! ```

pub mod collections;
pub mod models;

pub use collections::{Aggregates, Flights};
