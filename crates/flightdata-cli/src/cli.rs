//! Command handlers: run a validated lookup, print the outcome.

use anyhow::{Context, Result};
use flightdata_core::{Aggregates, FlightData, FlightRecord, Flights};
use log::debug;
use serde::Serialize;

use crate::{
    args::{Lookup, StatsGrouping},
    renderer::TerminalRenderer,
};

/// Owns the facade for the lifetime of one CLI invocation.
pub struct Cli {
    data: FlightData,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(data: FlightData, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            data,
            renderer,
            json,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    /// Runs a row-level lookup and prints the flights found.
    pub fn lookup(&self, lookup: &Lookup) -> Result<()> {
        let flights = self.fetch(lookup);
        debug!("Lookup returned {} flights", flights.len());

        if self.json {
            return print_json(&flights);
        }
        self.renderer.render(&Flights(flights).to_string())
    }

    /// Prints one of the aggregate delay summaries.
    pub fn stats(&self, grouping: StatsGrouping) -> Result<()> {
        match grouping {
            StatsGrouping::Airline => self.print_aggregates(
                "Percentage of delayed flights by airline",
                self.data.delay_percentage_by_airline(),
            ),
            StatsGrouping::Hour => self.print_aggregates(
                "Percentage of delayed flights per hour of the day",
                self.data.delay_percentage_by_hour(),
            ),
            StatsGrouping::Route => self.print_aggregates(
                "Percentage of delayed flights by route",
                self.data.delay_percentage_by_route(),
            ),
            StatsGrouping::RouteMap => self.print_aggregates(
                "Percentage of delayed flights by route, with coordinates",
                self.data.delay_percentage_by_route_with_coordinates(),
            ),
        }
    }

    /// Releases the store; the facade would also do this on drop.
    pub fn close(mut self) {
        self.data.close();
    }

    fn fetch(&self, lookup: &Lookup) -> Vec<FlightRecord> {
        match lookup {
            Lookup::Id(params) => self.data.flight_by_id(params),
            Lookup::Date(params) => self.data.flights_by_date(params),
            Lookup::Airline(params) => self.data.delayed_flights_by_airline(params),
            Lookup::Airport(params) => self.data.delayed_flights_by_airport(params),
        }
    }

    fn print_aggregates<T>(&self, title: &'static str, rows: Vec<T>) -> Result<()>
    where
        T: Serialize + std::fmt::Display,
    {
        if self.json {
            return print_json(&rows);
        }
        self.renderer.render(&Aggregates::new(title, rows).to_string())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    println!("{json}");
    Ok(())
}
