use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{LookupFailure, LookupResult},
    http::HttpFetcher,
    model::Coordinate,
};

use super::Geocoder;

/// Open-Meteo geocoding search client.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: HttpFetcher,
    base_url: Url,
    language: String,
}

impl GeocodingClient {
    pub fn new(http: HttpFetcher, base_url: Url, language: impl Into<String>) -> Self {
        Self { http, base_url, language: language.into() }
    }

    fn search_url(&self, city: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("name", city)
            .append_pair("count", "1")
            .append_pair("language", &self.language)
            .append_pair("format", "json");
        url
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

fn first_match(city: &str, response: GeoResponse) -> LookupResult<Coordinate> {
    let first = response
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| LookupFailure::NotFound { city: city.to_string() })?;

    match (first.latitude, first.longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate { latitude, longitude }),
        _ => Err(LookupFailure::MissingCoordinates { city: city.to_string() }),
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    #[instrument(skip(self))]
    async fn locate(&self, city: &str) -> LookupResult<Coordinate> {
        let response: GeoResponse = self
            .http
            .get_json(self.search_url(city))
            .await
            .map_err(LookupFailure::Geocoding)?;

        let coordinate = first_match(city, response)?;
        debug!(lat = coordinate.latitude, lon = coordinate.longitude, "city resolved");
        Ok(coordinate)
    }
}
