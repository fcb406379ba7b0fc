use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: f64,
    pub wind_speed_unit: String,
    /// Local time of the reading, as reported upstream.
    pub observed_at: Option<NaiveDateTime>,
}

/// A successful lookup: the city as the user typed it and its current weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeather {
    pub city: String,
    pub reading: WeatherReading,
}
