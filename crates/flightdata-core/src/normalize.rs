//! Maps raw row-level query results to [`FlightRecord`]s.
//!
//! Normalization never fails. Columns are looked up by name; a missing or
//! non-numeric delay becomes `0`, which makes "on time" and "unknown"
//! indistinguishable downstream. [`parse_delay`] keeps the distinction for
//! callers that need it.

use rusqlite::types::Value;

use crate::{db::RawRow, models::FlightRecord};

/// Delay substituted for missing or unparseable source values.
pub const DEFAULT_DELAY: i64 = 0;

/// Builds the canonical record for one row.
///
/// Text columns that are absent or NULL come through as empty strings; the
/// catalog's inner join keeps that from happening for well-formed data.
pub fn normalize(row: &RawRow) -> FlightRecord {
    FlightRecord {
        id: row.get_i64("ID").unwrap_or_default(),
        origin_airport: row.get_text("ORIGIN_AIRPORT").unwrap_or_default(),
        destination_airport: row.get_text("DESTINATION_AIRPORT").unwrap_or_default(),
        airline: row.get_text("AIRLINE").unwrap_or_default(),
        delay: coerce_delay(row.get("DELAY")),
    }
}

/// Normalizes every row, preserving order.
pub fn normalize_all(rows: &[RawRow]) -> Vec<FlightRecord> {
    rows.iter().map(normalize).collect()
}

/// Applies the default-to-zero policy on top of [`parse_delay`].
pub fn coerce_delay(value: Option<&Value>) -> i64 {
    value.and_then(parse_delay).unwrap_or(DEFAULT_DELAY)
}

/// Reads a delay in whole minutes, or `None` when the value is unknown.
///
/// Integers pass through, reals are truncated toward zero, and text must hold
/// a base-10 integer (surrounding whitespace allowed).
pub fn parse_delay(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(minutes) => Some(*minutes),
        Value::Real(minutes) if minutes.is_finite() => Some(minutes.trunc() as i64),
        Value::Text(text) => text.trim().parse().ok(),
        Value::Real(_) | Value::Null | Value::Blob(_) => None,
    }
}
