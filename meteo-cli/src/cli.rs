use anyhow::Context;
use clap::{Parser, Subcommand};
use meteo_core::{Config, lookup_weather, open_meteo_from_config};

use crate::prompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather for a city")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city. This is the default.
    Show {
        /// City name; prompted for when absent.
        city: Option<String>,
    },

    /// Set endpoints, result language and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show { city: None }) {
            Command::Show { city } => {
                let config = Config::load()?;
                let clients = open_meteo_from_config(&config)?;

                let raw = match city {
                    Some(city) => city,
                    None => match prompt::read_city()? {
                        Some(city) => city,
                        // Prompt cancelled: nothing to look up.
                        None => return Ok(()),
                    },
                };

                let outcome = lookup_weather(&raw, &clients.geocoding, &clients.forecast).await;
                println!("{outcome}");
            }
            Command::Configure => {
                let mut config = Config::load()?;
                prompt::configure(&mut config)?;
                let path = config.save().context("Failed to save configuration")?;
                println!("Configuration saved to {}", path.display());
            }
        }

        Ok(())
    }
}
