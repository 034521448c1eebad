//! Flight record model definition.

use serde::{Deserialize, Serialize};

/// One flight, in the canonical shape every caller consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Unique flight identifier in the source dataset
    #[serde(rename = "ID")]
    pub id: i64,

    /// IATA code of the departure airport
    #[serde(rename = "ORIGIN_AIRPORT")]
    pub origin_airport: String,

    /// IATA code of the arrival airport
    #[serde(rename = "DESTINATION_AIRPORT")]
    pub destination_airport: String,

    /// Airline display name
    #[serde(rename = "AIRLINE")]
    pub airline: String,

    /// Departure delay in minutes; negative for early departures, 0 when the
    /// source value is missing or unparseable
    #[serde(rename = "DELAY")]
    pub delay: i64,
}

impl FlightRecord {
    /// Whether the flight left later than scheduled.
    pub fn is_delayed(&self) -> bool {
        self.delay > 0
    }
}
