//! Flights CLI Application
//!
//! Command-line and interactive front end for the flight delay dataset.

mod args;
mod cli;
mod input;
mod menu;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, Lookup};
use clap::Parser;
use cli::Cli;
use flightdata_core::FlightDataBuilder;
use log::info;
use menu::{InteractiveMenu, MenuExit};
use renderer::TerminalRenderer;
use Commands::*;

// Conventional status for termination by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database,
        no_color,
        json,
        command,
    } = Args::parse();

    let data = FlightDataBuilder::new()
        .with_database_uri(database)
        .build()
        .context("Failed to open flight database")?;

    let cli = Cli::new(data, TerminalRenderer::new(!no_color), json);

    info!("Flights started");

    let result = match command {
        Some(Id { flight_id }) => cli.lookup(&Lookup::id(flight_id)),
        Some(Date { date }) => cli.lookup(&Lookup::date(date)),
        Some(Airline { name }) => cli.lookup(&Lookup::airline(name)),
        Some(Airport { code }) => cli.lookup(&Lookup::airport(code)),
        Some(Stats { by }) => cli.stats(by),
        Some(Menu) | None => {
            let exit = InteractiveMenu::new(&cli).run().await;
            if let Ok(MenuExit::Interrupted) = exit {
                // A pending stdin read cannot be cancelled, so release the
                // store now and exit without waiting on runtime shutdown.
                cli.close();
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            exit.map(|_| ())
        }
    };

    cli.close();
    result
}
