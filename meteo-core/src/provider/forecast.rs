use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Url;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::{LookupFailure, LookupResult},
    http::HttpFetcher,
    model::{Coordinate, WeatherReading},
};

use super::WeatherSource;

/// Open-Meteo forecast client, used for current conditions only.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: HttpFetcher,
    base_url: Url,
}

impl ForecastClient {
    pub fn new(http: HttpFetcher, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn current_url(&self, at: Coordinate) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &at.latitude.to_string())
            .append_pair("longitude", &at.longitude.to_string())
            .append_pair("current_weather", "true")
            .append_pair("temperature_unit", "celsius")
            .append_pair("windspeed_unit", "kmh");
        url
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<OmCurrentWeather>,
    // The live API names this block `current_weather_units`.
    #[serde(alias = "current_weather_units")]
    current_units: Option<OmCurrentUnits>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentUnits {
    temperature: String,
    windspeed: String,
}

fn reading_from(response: ForecastResponse) -> LookupResult<WeatherReading> {
    let (Some(current), Some(units)) = (response.current_weather, response.current_units) else {
        return Err(LookupFailure::IncompleteData);
    };

    Ok(WeatherReading {
        temperature: current.temperature,
        temperature_unit: units.temperature,
        wind_speed: current.windspeed,
        wind_speed_unit: units.windspeed,
        observed_at: current.time.as_deref().and_then(parse_observation_time),
    })
}

fn parse_observation_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[async_trait]
impl WeatherSource for ForecastClient {
    #[instrument(skip(self))]
    async fn current(&self, at: Coordinate) -> LookupResult<WeatherReading> {
        let response: ForecastResponse = self
            .http
            .get_json(self.current_url(at))
            .await
            .map_err(LookupFailure::Weather)?;

        reading_from(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).expect("valid forecast json")
    }

    #[test]
    fn current_url_asks_for_celsius_and_kmh() {
        let client = ForecastClient::new(
            HttpFetcher::new(None).unwrap(),
            Url::parse("https://api.example/v1/forecast").unwrap(),
        );

        let url = client.current_url(Coordinate { latitude: 52.52, longitude: 13.41 });

        assert_eq!(
            url.query(),
            Some(
                "latitude=52.52&longitude=13.41&current_weather=true\
                 &temperature_unit=celsius&windspeed_unit=kmh"
            )
        );
    }

    #[test]
    fn extracts_reading_with_units() {
        let reading = reading_from(parse(
            r#"{
                "current_units": {"temperature": "°C", "windspeed": "km/h"},
                "current_weather": {"time": "2024-01-15T12:00", "temperature": 18.3, "windspeed": 12.1}
            }"#,
        ))
        .unwrap();

        assert_eq!(reading.temperature, 18.3);
        assert_eq!(reading.temperature_unit, "°C");
        assert_eq!(reading.wind_speed, 12.1);
        assert_eq!(reading.wind_speed_unit, "km/h");
        assert_eq!(
            reading.observed_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            Some("2024-01-15 12:00".to_string())
        );
    }

    #[test]
    fn accepts_current_weather_units_block() {
        let reading = reading_from(parse(
            r#"{
                "current_weather_units": {"temperature": "°C", "windspeed": "km/h"},
                "current_weather": {"temperature": -3.0, "windspeed": 0.0}
            }"#,
        ))
        .unwrap();

        assert_eq!(reading.temperature_unit, "°C");
        assert_eq!(reading.observed_at, None);
    }

    #[test]
    fn missing_units_is_incomplete_regardless_of_current_weather() {
        let err = reading_from(parse(
            r#"{"current_weather": {"temperature": 18.3, "windspeed": 12.1}}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, LookupFailure::IncompleteData));
    }

    #[test]
    fn missing_current_weather_is_incomplete() {
        let err = reading_from(parse(
            r#"{"current_units": {"temperature": "°C", "windspeed": "km/h"}}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, LookupFailure::IncompleteData));
    }

    #[test]
    fn unparsable_time_is_ignored() {
        assert_eq!(parse_observation_time("yesterday"), None);
        assert!(parse_observation_time("2024-01-15T12:00:30").is_some());
    }
}
