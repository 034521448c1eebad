//! Display implementations for result models.

use std::fmt;

use crate::models::{
    AirlineDelay, Coordinates, DelayStats, FlightRecord, HourlyDelay, RouteDelay,
    RouteDelayWithCoordinates,
};

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}.** {} -> {} by *{}*",
            self.id, self.origin_airport, self.destination_airport, self.airline
        )?;
        if self.is_delayed() {
            write!(f, ", Delay: {} Minutes", self.delay)?;
        }
        Ok(())
    }
}

impl fmt::Display for DelayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} delayed ({:.2}%)",
            self.delayed_flights, self.total_flights, self.delayed_percentage
        )
    }
}

impl fmt::Display for AirlineDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {}", self.airline, self.stats)
    }
}

impl fmt::Display for HourlyDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hour() {
            Some(hour) => write!(f, "**{hour:02}:00**: {}", self.stats),
            None => write!(f, "**{}**: {}", self.hour_of_day, self.stats),
        }
    }
}

impl fmt::Display for RouteDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{} -> {}**: {}",
            self.origin_airport, self.destination_airport, self.stats
        )
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

impl fmt::Display for RouteDelayWithCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route)?;
        if let (Some(origin), Some(destination)) = (&self.origin, &self.destination) {
            write!(f, " `{origin} -> {destination}`")?;
        }
        Ok(())
    }
}
