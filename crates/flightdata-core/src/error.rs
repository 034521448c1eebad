//! Error types for the flight data library.

use thiserror::Error;

use crate::catalog::QueryName;

/// Coarse classification of a [`FlightDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Construction-time failure; the store cannot be used at all.
    Connection,
    /// Per-call failure, contained at the executor boundary.
    Execution,
}

/// Comprehensive error type for all flight data operations.
#[derive(Error, Debug)]
pub enum FlightDataError {
    /// The backing store could not be opened
    #[error("Connection error for '{uri}': {message}")]
    Connection {
        uri: String,
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },
    /// Statement preparation, execution or row fetch failed
    #[error("Query '{query}' failed: {message}")]
    Execution {
        query: QueryName,
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Bound parameters do not match the template's placeholders
    #[error("Query '{query}' got invalid parameter '{name}': {reason}")]
    InvalidParameter {
        query: QueryName,
        name: String,
        reason: String,
    },
    /// The connection was already released
    #[error("Query '{query}' attempted on a closed connection")]
    Closed { query: QueryName },
    /// XDG base directory lookup errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating connection errors with optional context.
pub struct ConnectionErrorBuilder {
    uri: String,
    message: String,
}

impl ConnectionErrorBuilder {
    /// Create a new connection error builder for a URI.
    pub fn new(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> FlightDataError {
        FlightDataError::Connection {
            uri: self.uri,
            message: self.message,
            source: Some(source),
        }
    }

    /// Build the error without an underlying driver error.
    pub fn build(self) -> FlightDataError {
        FlightDataError::Connection {
            uri: self.uri,
            message: self.message,
            source: None,
        }
    }
}

/// Builder for creating execution errors.
pub struct ExecutionErrorBuilder {
    query: QueryName,
    message: String,
}

impl ExecutionErrorBuilder {
    /// Create a new execution error builder for a query.
    pub fn new(query: QueryName, message: impl Into<String>) -> Self {
        Self {
            query,
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> FlightDataError {
        FlightDataError::Execution {
            query: self.query,
            message: self.message,
            source,
        }
    }
}

impl FlightDataError {
    /// Creates a builder for connection errors.
    pub fn connection(uri: impl Into<String>, message: impl Into<String>) -> ConnectionErrorBuilder {
        ConnectionErrorBuilder::new(uri, message)
    }

    /// Creates a builder for execution errors.
    pub fn execution(query: QueryName, message: impl Into<String>) -> ExecutionErrorBuilder {
        ExecutionErrorBuilder::new(query, message)
    }

    /// Classifies the error.
    ///
    /// Configuration problems surface while building the facade, so they are
    /// grouped with connection failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlightDataError::Connection { .. }
            | FlightDataError::XdgDirectory(_)
            | FlightDataError::Configuration { .. } => ErrorKind::Connection,
            FlightDataError::Execution { .. }
            | FlightDataError::InvalidParameter { .. }
            | FlightDataError::Closed { .. } => ErrorKind::Execution,
        }
    }

    /// The catalog query involved, if any.
    pub fn query(&self) -> Option<QueryName> {
        match self {
            FlightDataError::Execution { query, .. }
            | FlightDataError::InvalidParameter { query, .. }
            | FlightDataError::Closed { query } => Some(*query),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map driver errors to an execution error for `query`.
    fn exec_context(self, query: QueryName, message: &str) -> Result<T>;

    /// Map driver errors to a connection error for `uri`.
    fn connect_context(self, uri: &str, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn exec_context(self, query: QueryName, message: &str) -> Result<T> {
        self.map_err(|e| FlightDataError::execution(query, message).with_source(e))
    }

    fn connect_context(self, uri: &str, message: &str) -> Result<T> {
        self.map_err(|e| FlightDataError::connection(uri, message).with_source(e))
    }
}

/// Result type alias for flight data operations
pub type Result<T> = std::result::Result<T, FlightDataError>;
