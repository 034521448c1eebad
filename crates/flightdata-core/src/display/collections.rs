//! Collection wrapper types for displaying query results.

use std::fmt;

use crate::models::FlightRecord;

/// Newtype wrapper for displaying a list of flights.
///
/// Prints a result count followed by one bullet per flight, or a
/// "No results found." line when empty.
pub struct Flights(pub Vec<FlightRecord>);

impl Flights {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Flights {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Flights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No results found.");
        }
        writeln!(f, "Got {} results.", self.0.len())?;
        writeln!(f)?;
        for flight in self {
            writeln!(f, "- {flight}")?;
        }
        Ok(())
    }
}

/// Titled wrapper for displaying aggregate statistics rows.
pub struct Aggregates<T> {
    pub title: &'static str,
    pub rows: Vec<T>,
}

impl<T> Aggregates<T> {
    pub fn new(title: &'static str, rows: Vec<T>) -> Self {
        Self { title, rows }
    }
}

impl<T: fmt::Display> fmt::Display for Aggregates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        if self.rows.is_empty() {
            return writeln!(f, "No results found.");
        }
        for row in &self.rows {
            writeln!(f, "- {row}")?;
        }
        Ok(())
    }
}
