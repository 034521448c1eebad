#![allow(dead_code)]

use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use flightdata_core::{
    ErrorReporter, FlightData, FlightDataBuilder, FlightDataError, QueryName,
};
use rusqlite::Connection;
use tempfile::TempDir;

const FIXTURE_SQL: &str = include_str!("../fixtures/flights.sql");

/// Writes the fixture dataset to `path`.
pub fn seed_database(path: &Path) {
    let connection = Connection::open(path).expect("Failed to create fixture database");
    connection
        .execute_batch(FIXTURE_SQL)
        .expect("Failed to seed fixture database");
}

/// Creates a seeded database in a temporary directory and returns its URI.
pub fn create_test_database() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("flights.sqlite3");
    seed_database(&db_path);
    let uri = format!("sqlite:///{}", db_path.display());
    (temp_dir, uri)
}

/// Helper function to create a facade over the fixture dataset.
pub fn create_test_flight_data() -> (TempDir, FlightData) {
    let (temp_dir, uri) = create_test_database();
    let data = FlightDataBuilder::new()
        .with_database_uri(Some(&uri))
        .build()
        .expect("Failed to open fixture database");
    (temp_dir, data)
}

/// Reporter that counts how many errors reached the boundary.
#[derive(Clone, Default)]
pub struct CountingReporter {
    count: Arc<AtomicUsize>,
}

impl CountingReporter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _query: QueryName, _error: &FlightDataError) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
