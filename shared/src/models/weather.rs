//! Weather forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for one half-day period
///
/// One record exists per (date, period) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub period: Period,
    pub weather: WeatherKind,
    pub temperature: f64,
    pub feels_like: f64,
}

/// Half-day forecast period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    Forenoon,
    Afternoon,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Forenoon => "Forenoon",
            Period::Afternoon => "Afternoon",
        }
    }
}

/// Forecast weather condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeatherKind {
    Sunny,
    Rain,
    Cloudy,
    Thunderstorm,
    Snow,
    Fog,
    Windy,
}

impl WeatherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::Rain => "Rain",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::Thunderstorm => "Thunderstorm",
            WeatherKind::Snow => "Snow",
            WeatherKind::Fog => "Fog",
            WeatherKind::Windy => "Windy",
        }
    }
}
