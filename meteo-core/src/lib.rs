//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Configuration (endpoints, locale, timeout)
//! - A single-shot JSON fetch helper over `reqwest`
//! - Geocoding and current-weather clients for Open-Meteo
//! - The lookup that chains them and renders the outcome
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{FetchError, LookupFailure, LookupResult};
pub use http::HttpFetcher;
pub use lookup::{Outcome, lookup_weather};
pub use model::{CityWeather, Coordinate, WeatherReading};
pub use provider::{
    Geocoder, OpenMeteo, WeatherSource, forecast::ForecastClient, geocoding::GeocodingClient,
    open_meteo_from_config,
};
