//! SQLite connection management for the flight dataset.
//!
//! [`Database`] owns exactly one read-only connection for its whole lifetime.
//! Every statement runs inside [`Database::scoped_execute`], which prepares,
//! binds, drains all rows into memory and drops the statement before
//! returning, whichever way it returns. The connection itself is released by
//! [`Database::close`] or, failing that, when the `Database` is dropped.

use log::{debug, info, warn};
use rusqlite::{types::Value, Connection, OpenFlags, ToSql};

use crate::{
    catalog::QueryName,
    error::{DatabaseResultExt, FlightDataError, Result},
    params::QueryParams,
};

pub mod row;
pub mod uri;

pub use row::RawRow;
pub use uri::DatabaseLocation;

// Touches the schema so a file that is not a SQLite database fails at open.
const PROBE_SQL: &str = "SELECT COUNT(*) FROM sqlite_master";

/// Database connection handler.
pub struct Database {
    uri: String,
    connection: Option<Connection>,
}

impl Database {
    /// Opens the store named by `uri` in read-only mode.
    ///
    /// # Errors
    ///
    /// Returns `FlightDataError::Connection` if the URI is malformed, the file
    /// cannot be opened, or it is not a SQLite database.
    pub fn open(uri: &str) -> Result<Self> {
        let location = DatabaseLocation::parse(uri)?;
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let connection = match &location {
            DatabaseLocation::Path(path) => Connection::open_with_flags(path, flags),
            DatabaseLocation::Uri(file_uri) => Connection::open_with_flags(file_uri, flags),
        }
        .connect_context(uri, "Failed to open database")?;

        connection
            .query_row(PROBE_SQL, [], |row| row.get::<_, i64>(0))
            .connect_context(uri, "Database is not readable")?;

        info!("Opened flight database at {uri}");
        Ok(Self {
            uri: uri.to_string(),
            connection: Some(connection),
        })
    }

    /// The URI this database was opened with.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether the connection is still held.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Runs `query` with `params` bound and returns every result row.
    ///
    /// The prepared statement and its cursor never outlive this call.
    ///
    /// # Errors
    ///
    /// Returns `FlightDataError::Closed` after [`Database::close`], and
    /// `FlightDataError::Execution` for any driver failure while preparing,
    /// binding or stepping the statement.
    pub fn scoped_execute(&self, query: QueryName, params: &QueryParams) -> Result<Vec<RawRow>> {
        let connection = self
            .connection
            .as_ref()
            .ok_or(FlightDataError::Closed { query })?;

        let mut stmt = connection
            .prepare(query.sql())
            .exec_context(query, "Failed to prepare statement")?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let placeholders: Vec<(String, &Value)> = params
            .iter()
            .map(|(name, value)| (format!(":{name}"), value))
            .collect();
        let bound: Vec<(&str, &dyn ToSql)> = placeholders
            .iter()
            .map(|(name, value)| (name.as_str(), *value as &dyn ToSql))
            .collect();

        let mut rows = stmt
            .query(bound.as_slice())
            .exec_context(query, "Failed to execute statement")?;

        let mut fetched = Vec::new();
        while let Some(row) = rows.next().exec_context(query, "Failed to fetch row")? {
            let values = columns
                .iter()
                .enumerate()
                .map(|(index, name)| Ok((name.clone(), row.get::<_, Value>(index)?)))
                .collect::<rusqlite::Result<Vec<_>>>()
                .exec_context(query, "Failed to read column")?;
            fetched.push(RawRow::new(values));
        }

        debug!("{query} returned {} rows", fetched.len());
        Ok(fetched)
    }

    /// Releases the connection. Safe to call any number of times.
    pub fn close(&mut self) {
        let Some(connection) = self.connection.take() else {
            return;
        };

        match connection.close() {
            Ok(()) => info!("Closed flight database at {}", self.uri),
            // The handle comes back on failure; dropping it finalizes anyway.
            Err((_connection, e)) => warn!("Error while closing {}: {e}", self.uri),
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("uri", &self.uri)
            .field("open", &self.is_open())
            .finish()
    }
}
