//! Named SQL templates for every query the flight data layer can run.
//!
//! Templates only ever reference caller input through named placeholders
//! (`:id`, `:day`, ...). Binding happens in the executor; nothing in this
//! module is built from caller-supplied text.

use std::fmt;

// Columns shared by every row-level query. `airlines.AIRLINE` is aliased
// explicitly so the display name never collides with the foreign key column
// of the same name on `flights`.
macro_rules! flight_select {
    ($filter:literal) => {
        concat!(
            "SELECT flights.ID AS ID, flights.ORIGIN_AIRPORT AS ORIGIN_AIRPORT, ",
            "flights.DESTINATION_AIRPORT AS DESTINATION_AIRPORT, ",
            "airlines.AIRLINE AS AIRLINE, flights.DEPARTURE_DELAY AS DELAY ",
            "FROM flights JOIN airlines ON flights.AIRLINE = airlines.ID ",
            $filter,
            " ORDER BY flights.ID"
        )
    };
}

// Delay statistics columns shared by every aggregate query. Only rows with a
// flight ID are counted, on both sides of the ratio, so delayed_flights never
// exceeds total_flights. The CAST stops purely non-numeric text delays (which
// SQLite orders above every number) from counting as delayed. Text with a
// numeric prefix such as '5abc' still casts to its prefix.
macro_rules! delayed_case {
    () => {
        "CASE WHEN flights.ID IS NOT NULL \
         AND CAST(flights.DEPARTURE_DELAY AS INTEGER) > 0 THEN 1 END"
    };
}

macro_rules! delay_stats {
    () => {
        concat!(
            "COUNT(flights.ID) AS total_flights, ",
            "COUNT(",
            delayed_case!(),
            ") AS delayed_flights, ",
            "(COUNT(",
            delayed_case!(),
            ") * 100.0 / COUNT(flights.ID)) AS delayed_percentage"
        )
    };
}

const FLIGHT_BY_ID_SQL: &str = flight_select!("WHERE flights.ID = :id");
const FLIGHTS_BY_DATE_SQL: &str = flight_select!(
    "WHERE flights.YEAR = :year AND flights.MONTH = :month AND flights.DAY = :day"
);
const DELAYED_FLIGHTS_BY_AIRLINE_SQL: &str = flight_select!("WHERE airlines.AIRLINE = :airline");
const DELAYED_FLIGHTS_BY_AIRPORT_SQL: &str =
    flight_select!("WHERE flights.ORIGIN_AIRPORT = :airport");

const DELAY_PCT_BY_AIRLINE_SQL: &str = concat!(
    "SELECT airlines.AIRLINE AS AIRLINE, ",
    delay_stats!(),
    " FROM flights JOIN airlines ON flights.AIRLINE = airlines.ID",
    " GROUP BY airlines.AIRLINE",
    " HAVING COUNT(flights.ID) > 0",
    " ORDER BY airlines.AIRLINE"
);

const DELAY_PCT_BY_HOUR_SQL: &str = concat!(
    "SELECT SUBSTR(flights.SCHEDULED_DEPARTURE, 1, 2) AS hour_of_day, ",
    delay_stats!(),
    " FROM flights",
    " GROUP BY hour_of_day",
    " HAVING COUNT(flights.ID) > 0",
    " ORDER BY hour_of_day"
);

const DELAY_PCT_BY_ROUTE_SQL: &str = concat!(
    "SELECT flights.ORIGIN_AIRPORT AS ORIGIN_AIRPORT, ",
    "flights.DESTINATION_AIRPORT AS DESTINATION_AIRPORT, ",
    delay_stats!(),
    " FROM flights",
    " GROUP BY flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT",
    " HAVING COUNT(flights.ID) > 0",
    " ORDER BY flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT"
);

const DELAY_PCT_BY_ROUTE_WITH_COORDS_SQL: &str = concat!(
    "SELECT flights.ORIGIN_AIRPORT AS ORIGIN_AIRPORT, ",
    "flights.DESTINATION_AIRPORT AS DESTINATION_AIRPORT, ",
    delay_stats!(),
    ", origin_airports.LATITUDE AS origin_latitude",
    ", origin_airports.LONGITUDE AS origin_longitude",
    ", dest_airports.LATITUDE AS destination_latitude",
    ", dest_airports.LONGITUDE AS destination_longitude",
    " FROM flights",
    " JOIN airports AS origin_airports ON flights.ORIGIN_AIRPORT = origin_airports.IATA_CODE",
    " JOIN airports AS dest_airports ON flights.DESTINATION_AIRPORT = dest_airports.IATA_CODE",
    " GROUP BY flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT",
    " HAVING COUNT(flights.ID) > 0",
    " ORDER BY flights.ORIGIN_AIRPORT, flights.DESTINATION_AIRPORT"
);

/// Logical name of a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryName {
    FlightById,
    FlightsByDate,
    DelayedFlightsByAirline,
    DelayedFlightsByAirport,
    DelayPctByAirline,
    DelayPctByHour,
    DelayPctByRoute,
    DelayPctByRouteWithCoords,
}

impl QueryName {
    /// Every query in the catalog.
    pub const ALL: [QueryName; 8] = [
        QueryName::FlightById,
        QueryName::FlightsByDate,
        QueryName::DelayedFlightsByAirline,
        QueryName::DelayedFlightsByAirport,
        QueryName::DelayPctByAirline,
        QueryName::DelayPctByHour,
        QueryName::DelayPctByRoute,
        QueryName::DelayPctByRouteWithCoords,
    ];

    /// Returns the SQL template for this query.
    pub const fn sql(self) -> &'static str {
        match self {
            QueryName::FlightById => FLIGHT_BY_ID_SQL,
            QueryName::FlightsByDate => FLIGHTS_BY_DATE_SQL,
            QueryName::DelayedFlightsByAirline => DELAYED_FLIGHTS_BY_AIRLINE_SQL,
            QueryName::DelayedFlightsByAirport => DELAYED_FLIGHTS_BY_AIRPORT_SQL,
            QueryName::DelayPctByAirline => DELAY_PCT_BY_AIRLINE_SQL,
            QueryName::DelayPctByHour => DELAY_PCT_BY_HOUR_SQL,
            QueryName::DelayPctByRoute => DELAY_PCT_BY_ROUTE_SQL,
            QueryName::DelayPctByRouteWithCoords => DELAY_PCT_BY_ROUTE_WITH_COORDS_SQL,
        }
    }

    /// Named placeholders the template expects, without the leading colon.
    pub const fn placeholders(self) -> &'static [&'static str] {
        match self {
            QueryName::FlightById => &["id"],
            QueryName::FlightsByDate => &["day", "month", "year"],
            QueryName::DelayedFlightsByAirline => &["airline"],
            QueryName::DelayedFlightsByAirport => &["airport"],
            QueryName::DelayPctByAirline
            | QueryName::DelayPctByHour
            | QueryName::DelayPctByRoute
            | QueryName::DelayPctByRouteWithCoords => &[],
        }
    }

    /// Stable snake_case identifier, used in logs and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryName::FlightById => "flight_by_id",
            QueryName::FlightsByDate => "flights_by_date",
            QueryName::DelayedFlightsByAirline => "delayed_flights_by_airline",
            QueryName::DelayedFlightsByAirport => "delayed_flights_by_airport",
            QueryName::DelayPctByAirline => "delay_pct_by_airline",
            QueryName::DelayPctByHour => "delay_pct_by_hour",
            QueryName::DelayPctByRoute => "delay_pct_by_route",
            QueryName::DelayPctByRouteWithCoords => "delay_pct_by_route_with_coords",
        }
    }

    /// Whether the query returns per-flight rows that go through the
    /// normalizer, as opposed to grouped statistics.
    pub const fn is_row_level(self) -> bool {
        matches!(
            self,
            QueryName::FlightById
                | QueryName::FlightsByDate
                | QueryName::DelayedFlightsByAirline
                | QueryName::DelayedFlightsByAirport
        )
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
