//! Column-name-keyed result rows.

use rusqlite::types::Value;

/// A fully fetched result row, keyed by column name.
///
/// Lookups ignore ASCII case, matching how SQLite resolves identifiers, so
/// callers stay independent of both column order and alias casing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    columns: Vec<(String, Value)>,
}

impl RawRow {
    /// Builds a row from `(column, value)` pairs in select order.
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Returns the value of the first column named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Integer value of a column; REAL values with no fractional part count.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Integer(i) => Some(*i),
            Value::Real(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Floating point value of a column.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Value::Real(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Text value of a column. Integers are rendered in decimal; NULL and
    /// blobs yield `None`.
    pub fn get_text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Text(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(f) => Some(f.to_string()),
            Value::Null | Value::Blob(_) => None,
        }
    }

    /// Column names in select order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, Value)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawRow {
        RawRow::from_iter([
            ("ID".to_string(), Value::Integer(7)),
            ("airline".to_string(), Value::Text("Delta".to_string())),
            ("DELAY".to_string(), Value::Real(12.0)),
            ("origin_latitude".to_string(), Value::Null),
        ])
    }

    #[test]
    fn test_lookup_ignores_case() {
        let row = row();
        assert_eq!(row.get("id"), Some(&Value::Integer(7)));
        assert_eq!(row.get_text("AIRLINE").as_deref(), Some("Delta"));
    }

    #[test]
    fn test_lookup_is_independent_of_column_order() {
        let mut columns: Vec<(String, Value)> = row().columns;
        columns.reverse();
        let reversed = RawRow::new(columns);
        assert_eq!(reversed.get_i64("ID"), Some(7));
        assert_eq!(reversed.get_text("airline").as_deref(), Some("Delta"));
    }

    #[test]
    fn test_typed_accessors() {
        let row = row();
        assert_eq!(row.get_i64("DELAY"), Some(12));
        assert_eq!(row.get_f64("ID"), Some(7.0));
        assert_eq!(row.get_f64("origin_latitude"), None);
        assert_eq!(row.get_text("origin_latitude"), None);
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.column_names().count(), 4);
    }
}
