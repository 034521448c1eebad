//! Validation of user-supplied query inputs.
//!
//! The core binds whatever it is given, so every format check happens here,
//! both for clap value parsers and for the interactive menu.

use jiff::civil::Date;

const IATA_LENGTH: usize = 3;
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a numeric flight id.
pub fn parse_flight_id(input: &str) -> Result<i64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a numeric flight ID", input.trim()))
}

/// Parses a `DD/MM/YYYY` date, rejecting impossible calendar days.
pub fn parse_date(input: &str) -> Result<Date, String> {
    Date::strptime(DATE_FORMAT, input.trim())
        .map_err(|e| format!("Date format must be DD/MM/YYYY: {e}"))
}

/// Accepts exactly three alphabetic characters. Case is kept as typed.
pub fn parse_airport_code(input: &str) -> Result<String, String> {
    let code = input.trim();
    if code.chars().count() == IATA_LENGTH && code.chars().all(char::is_alphabetic) {
        Ok(code.to_string())
    } else {
        Err(format!("'{code}' is not a valid 3-letter airport code"))
    }
}

/// Accepts any non-empty airline name.
pub fn parse_airline_name(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        Err("Please provide an airline name".to_string())
    } else {
        Ok(name.to_string())
    }
}
