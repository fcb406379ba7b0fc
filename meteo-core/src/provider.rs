use crate::{
    Config,
    error::LookupResult,
    http::HttpFetcher,
    model::{Coordinate, WeatherReading},
    provider::{forecast::ForecastClient, geocoding::GeocodingClient},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod forecast;
pub mod geocoding;

/// Resolves a city name to a single coordinate pair.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn locate(&self, city: &str) -> LookupResult<Coordinate>;
}

/// Fetches current conditions at a coordinate pair.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, at: Coordinate) -> LookupResult<WeatherReading>;
}

/// Both Open-Meteo clients, sharing one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    pub geocoding: GeocodingClient,
    pub forecast: ForecastClient,
}

/// Construct the Open-Meteo clients from config.
pub fn open_meteo_from_config(config: &Config) -> anyhow::Result<OpenMeteo> {
    let http = HttpFetcher::new(config.timeout())?;

    Ok(OpenMeteo {
        geocoding: GeocodingClient::new(http.clone(), config.geocoding_url()?, &config.language),
        forecast: ForecastClient::new(http, config.forecast_url()?),
    })
}
