//! Builder for creating and configuring FlightData instances.

use log::debug;

use super::FlightData;
use crate::{
    db::Database,
    error::{FlightDataError, Result},
    executor::{ErrorReporter, Executor, LogReporter},
};

/// Environment variable consulted when no URI is given explicitly.
pub const DATABASE_URI_ENV: &str = "FLIGHTDATA_DATABASE_URI";

const XDG_PREFIX: &str = "flightdata";
const DEFAULT_DATABASE_FILE: &str = "flights.sqlite3";

/// Builder for creating and configuring FlightData instances.
pub struct FlightDataBuilder {
    database_uri: Option<String>,
    reporter: Option<Box<dyn ErrorReporter>>,
}

impl FlightDataBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_uri: None,
            reporter: None,
        }
    }

    /// Sets the database URI.
    ///
    /// If not specified, uses `$FLIGHTDATA_DATABASE_URI`, then an existing
    /// `$XDG_DATA_HOME/flightdata/flights.sqlite3`.
    pub fn with_database_uri<S: AsRef<str>>(mut self, uri: Option<S>) -> Self {
        if let Some(uri) = uri {
            self.database_uri = Some(uri.as_ref().to_string());
        }
        self
    }

    /// Replaces the default log-based error reporter.
    pub fn with_reporter(mut self, reporter: Box<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Opens the store and builds the facade.
    ///
    /// # Errors
    ///
    /// Returns `FlightDataError::Configuration` if no database location can be
    /// resolved, and `FlightDataError::Connection` if the store cannot be
    /// opened. Neither is retried.
    pub fn build(self) -> Result<FlightData> {
        let uri = match self.database_uri {
            Some(uri) => uri,
            None => Self::default_database_uri()?,
        };
        debug!("Resolved database URI: {uri}");

        let database = Database::open(&uri)?;
        let reporter: Box<dyn ErrorReporter> = match self.reporter {
            Some(reporter) => reporter,
            None => Box::new(LogReporter),
        };
        Ok(FlightData::new(Executor::with_reporter(database, reporter)))
    }

    /// Resolves the URI from the environment, then the XDG data directories.
    fn default_database_uri() -> Result<String> {
        if let Ok(uri) = std::env::var(DATABASE_URI_ENV) {
            if !uri.trim().is_empty() {
                return Ok(uri);
            }
        }

        let path = xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .find_data_file(DEFAULT_DATABASE_FILE)
            .ok_or_else(|| FlightDataError::Configuration {
                message: format!(
                    "no database given; pass a URI, set {DATABASE_URI_ENV}, or place \
                     {DEFAULT_DATABASE_FILE} in the '{XDG_PREFIX}' XDG data directory"
                ),
            })?;

        path.to_str()
            .map(String::from)
            .ok_or_else(|| FlightDataError::XdgDirectory(format!("non UTF-8 path: {}", path.display())))
    }
}

impl Default for FlightDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}
