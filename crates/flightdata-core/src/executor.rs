//! Query execution with a fail-soft reporting boundary.
//!
//! [`Executor::execute`] returns a typed [`Result`]. [`Executor::recover`]
//! is the boundary adapter: it hands any error to the configured
//! [`ErrorReporter`] exactly once and substitutes an empty result, so callers
//! that only want rows never see a persistence error.

use log::error;

use crate::{
    catalog::QueryName,
    db::{Database, RawRow},
    error::{FlightDataError, Result},
    params::QueryParams,
};

/// Sink for errors swallowed at the executor boundary.
pub trait ErrorReporter: Send + Sync {
    /// Called once for every failed execution that is recovered as empty.
    fn report(&self, query: QueryName, error: &FlightDataError);
}

/// Reports errors through the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, query: QueryName, error: &FlightDataError) {
        error!("Error executing query {query}: {error}");
    }
}

/// Binds parameters and runs catalog queries against a [`Database`].
pub struct Executor {
    database: Database,
    reporter: Box<dyn ErrorReporter>,
}

impl Executor {
    /// Creates an executor that reports through [`LogReporter`].
    pub fn new(database: Database) -> Self {
        Self::with_reporter(database, Box::new(LogReporter))
    }

    /// Creates an executor with a custom error reporter.
    pub fn with_reporter(database: Database, reporter: Box<dyn ErrorReporter>) -> Self {
        Self { database, reporter }
    }

    /// Runs `query` and returns all of its rows.
    ///
    /// # Errors
    ///
    /// Returns `FlightDataError::InvalidParameter` when `params` does not bind
    /// exactly the template's placeholders, and any error from
    /// [`Database::scoped_execute`].
    pub fn execute(&self, query: QueryName, params: &QueryParams) -> Result<Vec<RawRow>> {
        check_params(query, params)?;
        self.database.scoped_execute(query, params)
    }

    /// Collapses a failed outcome to `T::default()`, reporting the error.
    pub fn recover<T: Default>(&self, query: QueryName, outcome: Result<T>) -> T {
        outcome.unwrap_or_else(|e| {
            self.reporter.report(query, &e);
            T::default()
        })
    }

    /// Runs `query`, reporting any failure and returning no rows instead.
    pub fn execute_or_empty(&self, query: QueryName, params: &QueryParams) -> Vec<RawRow> {
        self.recover(query, self.execute(query, params))
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Releases the underlying connection.
    pub fn close(&mut self) {
        self.database.close();
    }
}

fn check_params(query: QueryName, params: &QueryParams) -> Result<()> {
    let expected = query.placeholders();

    if let Some((name, _)) = params.iter().find(|(name, _)| !expected.contains(name)) {
        return Err(FlightDataError::InvalidParameter {
            query,
            name: name.to_string(),
            reason: "not a placeholder of this query".to_string(),
        });
    }

    if let Some(missing) = expected.iter().find(|name| params.get(name).is_none()) {
        return Err(FlightDataError::InvalidParameter {
            query,
            name: (*missing).to_string(),
            reason: "no value bound".to_string(),
        });
    }

    Ok(())
}
