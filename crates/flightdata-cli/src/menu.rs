//! Interactive numbered menu over stdin.
//!
//! Reads lines asynchronously so Ctrl-C can interrupt any prompt. Invalid
//! input re-prompts; end of input or an interrupt leaves the menu.

use anyhow::Result;
use log::info;
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    signal,
};

use crate::{args::Lookup, cli::Cli, input};

const MENU: &str = "# Menu\n\
1. Show flight by ID\n\
2. Show flights by date\n\
3. Delayed flights by airline\n\
4. Delayed flights by origin airport\n\
5. Exit\n";

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose exit, or stdin ran out.
    Finished,
    /// Ctrl-C arrived while waiting for input.
    Interrupted,
}

enum Choice {
    ById,
    ByDate,
    ByAirline,
    ByAirport,
    Exit,
}

fn parse_choice(input: &str) -> Result<Choice, String> {
    match input.trim() {
        "1" => Ok(Choice::ById),
        "2" => Ok(Choice::ByDate),
        "3" => Ok(Choice::ByAirline),
        "4" => Ok(Choice::ByAirport),
        "5" => Ok(Choice::Exit),
        other => Err(format!("'{other}' is not a menu option")),
    }
}

// A read either yields a line, hits end of input, or is interrupted.
enum Read<T> {
    Value(T),
    Eof,
    Interrupted,
}

pub struct InteractiveMenu<'a> {
    cli: &'a Cli,
    lines: Lines<BufReader<Stdin>>,
}

impl<'a> InteractiveMenu<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Shows the menu until the user exits.
    pub async fn run(&mut self) -> Result<MenuExit> {
        loop {
            self.cli.renderer().render(MENU)?;

            let choice = match self.read_valid("Choose an option: ", parse_choice).await? {
                Read::Value(choice) => choice,
                Read::Eof => return Ok(MenuExit::Finished),
                Read::Interrupted => return Ok(MenuExit::Interrupted),
            };

            let lookup = match choice {
                Choice::ById => self
                    .read_valid("Enter flight ID: ", input::parse_flight_id)
                    .await?
                    .map(Lookup::id),
                Choice::ByDate => self
                    .read_valid("Enter date in DD/MM/YYYY format: ", input::parse_date)
                    .await?
                    .map(Lookup::date),
                Choice::ByAirline => self
                    .read_valid("Enter airline name: ", input::parse_airline_name)
                    .await?
                    .map(Lookup::airline),
                Choice::ByAirport => self
                    .read_valid("Enter origin airport IATA code: ", input::parse_airport_code)
                    .await?
                    .map(Lookup::airport),
                Choice::Exit => return Ok(MenuExit::Finished),
            };

            match lookup {
                Read::Value(lookup) => self.cli.lookup(&lookup)?,
                Read::Eof => return Ok(MenuExit::Finished),
                Read::Interrupted => return Ok(MenuExit::Interrupted),
            }
        }
    }

    async fn read_valid<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, String>,
    ) -> Result<Read<T>> {
        loop {
            let line = match self.read_line(prompt).await? {
                Read::Value(line) => line,
                Read::Eof => return Ok(Read::Eof),
                Read::Interrupted => return Ok(Read::Interrupted),
            };
            match parse(&line) {
                Ok(value) => return Ok(Read::Value(value)),
                Err(reason) => println!("Try again... {reason}"),
            }
        }
    }

    async fn read_line(&mut self, prompt: &str) -> Result<Read<String>> {
        self.cli.renderer().prompt(prompt)?;
        tokio::select! {
            line = self.lines.next_line() => Ok(match line? {
                Some(line) => Read::Value(line),
                None => Read::Eof,
            }),
            _ = signal::ctrl_c() => {
                println!();
                info!("Interrupted, leaving menu");
                Ok(Read::Interrupted)
            }
        }
    }
}

impl<T> Read<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Read<U> {
        match self {
            Read::Value(value) => Read::Value(f(value)),
            Read::Eof => Read::Eof,
            Read::Interrupted => Read::Interrupted,
        }
    }
}
