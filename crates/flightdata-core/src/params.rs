//! Parameter structures for flight data queries.
//!
//! These structures are shared by every interface (CLI, menu, any future
//! HTTP layer) and carry no framework-specific derives. Input validation
//! (numeric ids, `DD/MM/YYYY` dates, 3-letter airport codes) is the
//! interface's job; by the time a value lands here it is only bound, never
//! inspected.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  QueryParams    │
//! │  (clap derives) │───▶│ (this module)   │───▶│ (named binds)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use rusqlite::types::Value;

/// Named values bound to a catalog template's placeholders.
///
/// Names are stored without the leading colon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    values: Vec<(&'static str, Value)>,
}

impl QueryParams {
    /// An empty bind set, for templates without placeholders.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a named value.
    pub fn bind(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.values.push((name, value.into()));
        self
    }

    /// Iterates over `(name, value)` pairs in bind order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parameters for looking up a single flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightById {
    pub flight_id: i64,
}

impl From<&FlightById> for QueryParams {
    fn from(params: &FlightById) -> Self {
        QueryParams::none().bind("id", params.flight_id)
    }
}

/// Parameters for listing the flights of a calendar day.
///
/// No calendar validation is performed; `31/02/2015` simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightsByDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl From<&FlightsByDate> for QueryParams {
    fn from(params: &FlightsByDate) -> Self {
        QueryParams::none()
            .bind("day", i64::from(params.day))
            .bind("month", i64::from(params.month))
            .bind("year", i64::from(params.year))
    }
}

impl From<Date> for FlightsByDate {
    fn from(date: Date) -> Self {
        // jiff keeps day and month in 1..=31 and 1..=12, so the casts are lossless.
        Self {
            day: date.day() as u32,
            month: date.month() as u32,
            year: i32::from(date.year()),
        }
    }
}

/// Parameters for listing the flights of one airline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByAirline {
    /// Exact, case-sensitive airline display name.
    pub airline_name: String,
}

impl From<&ByAirline> for QueryParams {
    fn from(params: &ByAirline) -> Self {
        QueryParams::none().bind("airline", params.airline_name.clone())
    }
}

/// Parameters for listing the flights departing one airport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByAirport {
    /// IATA code matched exactly against the origin airport.
    pub airport_code: String,
}

impl From<&ByAirport> for QueryParams {
    fn from(params: &ByAirport) -> Self {
        QueryParams::none().bind("airport", params.airport_code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_params_bind_all_three_components() {
        let params = QueryParams::from(&FlightsByDate {
            day: 4,
            month: 7,
            year: 2015,
        });

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("day"), Some(&Value::Integer(4)));
        assert_eq!(params.get("month"), Some(&Value::Integer(7)));
        assert_eq!(params.get("year"), Some(&Value::Integer(2015)));
    }

    #[test]
    fn test_from_civil_date() {
        let date = Date::new(2015, 1, 31).expect("valid date");
        assert_eq!(
            FlightsByDate::from(date),
            FlightsByDate {
                day: 31,
                month: 1,
                year: 2015
            }
        );
    }

    #[test]
    fn test_text_params_are_bound_verbatim() {
        let params = QueryParams::from(&ByAirline {
            airline_name: "Delta'; DROP TABLE flights; --".to_string(),
        });
        assert_eq!(
            params.get("airline"),
            Some(&Value::Text("Delta'; DROP TABLE flights; --".to_string()))
        );
        assert!(QueryParams::none().is_empty());
    }
}
