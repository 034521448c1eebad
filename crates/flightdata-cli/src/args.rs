use clap::{Parser, Subcommand, ValueEnum};
use flightdata_core::{ByAirline, ByAirport, FlightById, FlightsByDate};
use jiff::civil::Date;

use crate::input;

/// Explore a historical flight delay dataset
///
/// Looks up flights by id, date, airline or origin airport, and summarizes
/// delay percentages by airline, departure hour and route. Run `menu` for an
/// interactive session.
#[derive(Parser)]
#[command(version, about, name = "flights")]
pub struct Args {
    /// Database URI (sqlite:///path or a file path). Defaults to
    /// $FLIGHTDATA_DATABASE_URI, then $XDG_DATA_HOME/flightdata/flights.sqlite3
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the flights CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show a flight by its ID
    Id {
        #[arg(value_parser = input::parse_flight_id, allow_negative_numbers = true)]
        flight_id: i64,
    },
    /// Show the flights of a day, given as DD/MM/YYYY
    Date {
        #[arg(value_parser = input::parse_date)]
        date: Date,
    },
    /// Show the flights of an airline (exact, case-sensitive name)
    Airline {
        #[arg(value_parser = input::parse_airline_name)]
        name: String,
    },
    /// Show the flights departing an airport (3-letter IATA code)
    Airport {
        #[arg(value_parser = input::parse_airport_code)]
        code: String,
    },
    /// Show delay percentages grouped by airline, hour or route
    Stats {
        #[arg(value_enum)]
        by: StatsGrouping,
    },
    /// Start the interactive menu
    #[command(alias = "m")]
    Menu,
}

/// Grouping for the `stats` command
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatsGrouping {
    /// Per airline
    Airline,
    /// Per scheduled departure hour
    Hour,
    /// Per origin/destination pair
    Route,
    /// Per route, with airport coordinates
    RouteMap,
}

/// A validated flight lookup, shared by subcommands and the menu.
pub enum Lookup {
    Id(FlightById),
    Date(FlightsByDate),
    Airline(ByAirline),
    Airport(ByAirport),
}

impl Lookup {
    pub fn id(flight_id: i64) -> Self {
        Lookup::Id(FlightById { flight_id })
    }

    pub fn date(date: Date) -> Self {
        Lookup::Date(date.into())
    }

    pub fn airline(airline_name: String) -> Self {
        Lookup::Airline(ByAirline { airline_name })
    }

    pub fn airport(airport_code: String) -> Self {
        Lookup::Airport(ByAirport { airport_code })
    }
}
