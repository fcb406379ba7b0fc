use std::io::{self, BufRead};

use anyhow::{Context, Result};
use inquire::{InquireError, Text, validator::Validation};
use meteo_core::{Config, config::parse_endpoint};
use tracing::debug;

/// Ask for a city name. `None` means the user cancelled the prompt.
///
/// Falls back to one plain line of stdin when it is not a terminal.
pub fn read_city() -> Result<Option<String>> {
    match Text::new("Enter city name:").prompt() {
        Ok(city) => Ok(Some(city)),
        Err(InquireError::NotTTY) => {
            debug!("stdin is not a terminal, reading one line");
            read_line(io::stdin().lock()).map(Some)
        }
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read city name"),
    }
}

fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).context("Failed to read city name from stdin")?;
    Ok(line)
}

/// Interactively edit `config`, offering current values as defaults.
pub fn configure(config: &mut Config) -> Result<()> {
    config.geocoding_url = endpoint("Geocoding endpoint:", &config.geocoding_url)?;
    config.forecast_url = endpoint("Forecast endpoint:", &config.forecast_url)?;

    config.language = Text::new("Result language:")
        .with_default(&config.language)
        .with_help_message("Two-letter code, e.g. pt, en, de")
        .prompt()
        .context("Failed to read language")?;

    let current = config.timeout_secs.map(|s| s.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds:")
        .with_initial_value(&current)
        .with_help_message("Leave empty to wait as long as the connection allows")
        .with_validator(|s: &str| {
            Ok(match parse_timeout(s) {
                Ok(_) => Validation::Valid,
                Err(_) => Validation::Invalid("Enter a whole number of seconds".into()),
            })
        })
        .prompt()
        .context("Failed to read timeout")?;
    config.timeout_secs = parse_timeout(&timeout)?;

    Ok(())
}

fn endpoint(message: &str, current: &str) -> Result<String> {
    Text::new(message)
        .with_default(current)
        .with_validator(|s: &str| {
            Ok(match parse_endpoint(s) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt()
        .with_context(|| format!("Failed to read {}", message.trim_end_matches(':').to_lowercase()))
}

fn parse_timeout(input: &str) -> Result<Option<u64>, std::num::ParseIntError> {
    let input = input.trim();
    if input.is_empty() { Ok(None) } else { input.parse().map(Some) }
}
