//! The two-stage lookup: city name -> coordinates -> current weather.

use std::fmt;

use tracing::info;

use crate::{
    error::LookupFailure,
    model::CityWeather,
    provider::{Geocoder, WeatherSource},
};

const RULE: &str = "-----------------------------------------";

/// Terminal state of one run. Exactly one is produced, and its `Display`
/// is the single message shown to the user.
#[derive(Debug)]
pub enum Outcome {
    /// Input was empty after trimming; nothing was requested.
    Invalid,
    GeocodeFailed(LookupFailure),
    WeatherFailed(LookupFailure),
    Done(CityWeather),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid => f.write_str("City name cannot be empty."),
            Outcome::GeocodeFailed(failure) | Outcome::WeatherFailed(failure) => {
                write!(f, "{failure}")
            }
            Outcome::Done(CityWeather { city, reading }) => {
                writeln!(f, "{RULE}")?;
                writeln!(f, "Current weather in {city}:")?;
                writeln!(f, "   Temperature: {} {}", reading.temperature, reading.temperature_unit)?;
                writeln!(f, "   Wind: {} {}", reading.wind_speed, reading.wind_speed_unit)?;
                if let Some(at) = reading.observed_at {
                    writeln!(f, "   Observed at: {}", at.format("%Y-%m-%d %H:%M"))?;
                }
                f.write_str(RULE)
            }
        }
    }
}

/// Run the lookup for `raw` input. Never fails: every failure is an [`Outcome`].
///
/// The weather source is only consulted once the geocoder has produced a
/// coordinate.
pub async fn lookup_weather(
    raw: &str,
    geocoder: &dyn Geocoder,
    weather: &dyn WeatherSource,
) -> Outcome {
    let city = raw.trim();
    if city.is_empty() {
        return Outcome::Invalid;
    }

    info!("Searching weather for: {city}...");

    let coordinate = match geocoder.locate(city).await {
        Ok(coordinate) => coordinate,
        Err(failure) => return Outcome::GeocodeFailed(failure),
    };

    match weather.current(coordinate).await {
        Ok(reading) => Outcome::Done(CityWeather { city: city.to_string(), reading }),
        Err(failure) => Outcome::WeatherFailed(failure),
    }
}
