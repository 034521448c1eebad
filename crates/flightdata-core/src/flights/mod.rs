//! High-level flight query API.
//!
//! [`FlightData`] is the entry point for every caller. It owns the
//! [`Executor`] (and through it the single store connection) and exposes one
//! method per catalog query:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   FlightData    │    │    Executor     │    │    Database     │
//! │  (named ops)    │───▶│ (bind, report)  │───▶│ (scoped exec)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//!    normalize / FromRawRow
//! ```
//!
//! Each operation comes in two forms. The `try_` form returns a typed
//! [`Result`] so failures stay inspectable. The plain form reports the
//! failure once through the configured [`ErrorReporter`] and returns an empty
//! `Vec`, which is what the CLI and any HTTP layer consume.
//!
//! [`ErrorReporter`]: crate::executor::ErrorReporter
//!
//! # Example
//!
//! ```rust,no_run
//! use flightdata_core::{params::FlightById, FlightDataBuilder};
//!
//! # fn example() -> Result<(), flightdata_core::FlightDataError> {
//! let data = FlightDataBuilder::new()
//!     .with_database_uri(Some("sqlite:///data/flights.sqlite3"))
//!     .build()?;
//!
//! for flight in data.flight_by_id(&FlightById { flight_id: 1 }) {
//!     println!("{flight}");
//! }
//! # Ok(())
//! # }
//! ```

use log::warn;

use crate::{
    catalog::QueryName,
    error::Result,
    executor::Executor,
    models::{
        AirlineDelay, FlightRecord, FromRawRow, HourlyDelay, RouteDelay,
        RouteDelayWithCoordinates,
    },
    normalize::normalize_all,
    params::{ByAirline, ByAirport, FlightById, FlightsByDate, QueryParams},
};

pub mod builder;

pub use builder::FlightDataBuilder;

/// Main interface for querying the flight dataset.
///
/// Not meant for concurrent use: the type is `Send` but deliberately not
/// `Sync`, since the underlying connection is not.
pub struct FlightData {
    executor: Executor,
}

impl FlightData {
    pub(crate) fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Looks up a flight by id. The result holds zero or one record.
    pub fn try_flight_by_id(&self, params: &FlightById) -> Result<Vec<FlightRecord>> {
        self.flights(QueryName::FlightById, &params.into())
    }

    /// Lists the flights scheduled on one calendar day.
    pub fn try_flights_by_date(&self, params: &FlightsByDate) -> Result<Vec<FlightRecord>> {
        self.flights(QueryName::FlightsByDate, &params.into())
    }

    /// Lists the flights of one airline, matched exactly by display name.
    pub fn try_delayed_flights_by_airline(&self, params: &ByAirline) -> Result<Vec<FlightRecord>> {
        self.flights(QueryName::DelayedFlightsByAirline, &params.into())
    }

    /// Lists the flights departing one airport.
    pub fn try_delayed_flights_by_airport(&self, params: &ByAirport) -> Result<Vec<FlightRecord>> {
        self.flights(QueryName::DelayedFlightsByAirport, &params.into())
    }

    /// Delay statistics grouped by airline, ordered by airline name.
    pub fn try_delay_percentage_by_airline(&self) -> Result<Vec<AirlineDelay>> {
        self.aggregate(QueryName::DelayPctByAirline)
    }

    /// Delay statistics grouped by scheduled departure hour.
    pub fn try_delay_percentage_by_hour(&self) -> Result<Vec<HourlyDelay>> {
        self.aggregate(QueryName::DelayPctByHour)
    }

    /// Delay statistics grouped by origin/destination pair.
    pub fn try_delay_percentage_by_route(&self) -> Result<Vec<RouteDelay>> {
        self.aggregate(QueryName::DelayPctByRoute)
    }

    /// Route statistics with endpoint coordinates. Routes touching an airport
    /// missing from the reference table are dropped by the join.
    pub fn try_delay_percentage_by_route_with_coordinates(
        &self,
    ) -> Result<Vec<RouteDelayWithCoordinates>> {
        self.aggregate(QueryName::DelayPctByRouteWithCoords)
    }

    pub fn flight_by_id(&self, params: &FlightById) -> Vec<FlightRecord> {
        self.recover(QueryName::FlightById, self.try_flight_by_id(params))
    }

    pub fn flights_by_date(&self, params: &FlightsByDate) -> Vec<FlightRecord> {
        self.recover(QueryName::FlightsByDate, self.try_flights_by_date(params))
    }

    pub fn delayed_flights_by_airline(&self, params: &ByAirline) -> Vec<FlightRecord> {
        self.recover(
            QueryName::DelayedFlightsByAirline,
            self.try_delayed_flights_by_airline(params),
        )
    }

    pub fn delayed_flights_by_airport(&self, params: &ByAirport) -> Vec<FlightRecord> {
        self.recover(
            QueryName::DelayedFlightsByAirport,
            self.try_delayed_flights_by_airport(params),
        )
    }

    pub fn delay_percentage_by_airline(&self) -> Vec<AirlineDelay> {
        self.recover(
            QueryName::DelayPctByAirline,
            self.try_delay_percentage_by_airline(),
        )
    }

    pub fn delay_percentage_by_hour(&self) -> Vec<HourlyDelay> {
        self.recover(QueryName::DelayPctByHour, self.try_delay_percentage_by_hour())
    }

    pub fn delay_percentage_by_route(&self) -> Vec<RouteDelay> {
        self.recover(QueryName::DelayPctByRoute, self.try_delay_percentage_by_route())
    }

    pub fn delay_percentage_by_route_with_coordinates(&self) -> Vec<RouteDelayWithCoordinates> {
        self.recover(
            QueryName::DelayPctByRouteWithCoords,
            self.try_delay_percentage_by_route_with_coordinates(),
        )
    }

    /// Whether the store connection is still held.
    pub fn is_open(&self) -> bool {
        self.executor.database().is_open()
    }

    /// Releases the store connection. Idempotent; also runs on drop.
    pub fn close(&mut self) {
        self.executor.close();
    }

    fn flights(&self, query: QueryName, params: &QueryParams) -> Result<Vec<FlightRecord>> {
        let rows = self.executor.execute(query, params)?;
        Ok(normalize_all(&rows))
    }

    fn aggregate<T: FromRawRow>(&self, query: QueryName) -> Result<Vec<T>> {
        let rows = self.executor.execute(query, &QueryParams::none())?;
        let decoded: Vec<T> = rows.iter().filter_map(T::from_raw_row).collect();
        if decoded.len() < rows.len() {
            warn!(
                "{query}: skipped {} rows with undecodable statistics",
                rows.len() - decoded.len()
            );
        }
        Ok(decoded)
    }

    fn recover<T: Default>(&self, query: QueryName, outcome: Result<T>) -> T {
        self.executor.recover(query, outcome)
    }
}

impl std::fmt::Debug for FlightData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightData")
            .field("database", self.executor.database())
            .finish()
    }
}
