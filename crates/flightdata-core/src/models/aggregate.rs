//! Aggregate delay statistics, one struct per grouping.
//!
//! These rows are decoded by column name but never normalized: a row whose
//! statistics columns are missing or mistyped is skipped, not coerced.

use serde::{Deserialize, Serialize};

use crate::db::RawRow;

/// Decodes a typed record from a column-name-keyed row.
pub trait FromRawRow: Sized {
    fn from_raw_row(row: &RawRow) -> Option<Self>;
}

/// Delay counts shared by every aggregate grouping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayStats {
    /// Flights in the group; always at least 1
    pub total_flights: i64,
    /// Flights in the group with a positive departure delay
    pub delayed_flights: i64,
    /// `delayed_flights * 100.0 / total_flights`
    pub delayed_percentage: f64,
}

impl FromRawRow for DelayStats {
    fn from_raw_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            total_flights: row.get_i64("total_flights")?,
            delayed_flights: row.get_i64("delayed_flights")?,
            delayed_percentage: row.get_f64("delayed_percentage")?,
        })
    }
}

/// Delay statistics for one airline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineDelay {
    pub airline: String,
    #[serde(flatten)]
    pub stats: DelayStats,
}

impl FromRawRow for AirlineDelay {
    fn from_raw_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            airline: row.get_text("AIRLINE")?,
            stats: DelayStats::from_raw_row(row)?,
        })
    }
}

/// Delay statistics for one scheduled-departure hour bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyDelay {
    /// Leading two characters of the scheduled departure time, as stored
    pub hour_of_day: String,
    #[serde(flatten)]
    pub stats: DelayStats,
}

impl HourlyDelay {
    /// The bucket as an hour number, when the stored key is numeric.
    pub fn hour(&self) -> Option<u32> {
        self.hour_of_day.trim().parse().ok()
    }
}

impl FromRawRow for HourlyDelay {
    fn from_raw_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            hour_of_day: row.get_text("hour_of_day")?,
            stats: DelayStats::from_raw_row(row)?,
        })
    }
}

/// Delay statistics for one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDelay {
    pub origin_airport: String,
    pub destination_airport: String,
    #[serde(flatten)]
    pub stats: DelayStats,
}

impl FromRawRow for RouteDelay {
    fn from_raw_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            origin_airport: row.get_text("ORIGIN_AIRPORT")?,
            destination_airport: row.get_text("DESTINATION_AIRPORT")?,
            stats: DelayStats::from_raw_row(row)?,
        })
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    fn from_columns(row: &RawRow, latitude: &str, longitude: &str) -> Option<Self> {
        Some(Self {
            latitude: row.get_f64(latitude)?,
            longitude: row.get_f64(longitude)?,
        })
    }
}

/// Route delay statistics with the coordinates of both endpoints.
///
/// Airports whose reference row lacks a position have `None` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDelayWithCoordinates {
    #[serde(flatten)]
    pub route: RouteDelay,
    pub origin: Option<Coordinates>,
    pub destination: Option<Coordinates>,
}

impl FromRawRow for RouteDelayWithCoordinates {
    fn from_raw_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            route: RouteDelay::from_raw_row(row)?,
            origin: Coordinates::from_columns(row, "origin_latitude", "origin_longitude"),
            destination: Coordinates::from_columns(
                row,
                "destination_latitude",
                "destination_longitude",
            ),
        })
    }
}
