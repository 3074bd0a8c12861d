//! Weather forecast service
//!
//! The weather document is optional: a missing file regenerates a fresh
//! synthetic 14-day forecast instead of failing the view.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

use shared::models::{Period, WeatherKind, WeatherRecord};

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Days covered by a generated forecast
const FORECAST_DAYS: i64 = 14;

const WEATHER_KINDS: [WeatherKind; 7] = [
    WeatherKind::Sunny,
    WeatherKind::Rain,
    WeatherKind::Cloudy,
    WeatherKind::Thunderstorm,
    WeatherKind::Snow,
    WeatherKind::Fog,
    WeatherKind::Windy,
];

/// Weather forecast service
#[derive(Clone)]
pub struct WeatherService {
    store: DataStore,
}

impl WeatherService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Load the forecast, regenerating it if the document is missing
    pub fn forecast(&self) -> AppResult<Vec<WeatherRecord>> {
        match self.store.load_weather() {
            Ok(records) => Ok(records),
            Err(AppError::DocumentNotFound(_)) => {
                tracing::info!("weather document missing, generating a fresh forecast");
                self.regenerate()
            }
            Err(err) => Err(err),
        }
    }

    /// Rewrite the weather document with a fresh synthetic forecast
    pub fn regenerate(&self) -> AppResult<Vec<WeatherRecord>> {
        let records = generate_forecast(Local::now().date_naive(), &mut rand::rng());
        self.store.save_weather(&records)?;
        Ok(records)
    }
}

/// Generate a 14-day forecast with Forenoon and Afternoon records per day
///
/// Temperatures land in 10..35 °C except for Snow (-5..5 °C); feels-like
/// stays within 2 °C of the temperature. Both round to one decimal place.
pub fn generate_forecast(start: NaiveDate, rng: &mut impl Rng) -> Vec<WeatherRecord> {
    let mut records = Vec::with_capacity((FORECAST_DAYS * 2) as usize);
    for offset in 0..FORECAST_DAYS {
        let date = start + Duration::days(offset);
        for period in [Period::Forenoon, Period::Afternoon] {
            let weather = WEATHER_KINDS[rng.random_range(0..WEATHER_KINDS.len())];
            let temperature = if weather == WeatherKind::Snow {
                round1(rng.random_range(-5.0..5.0))
            } else {
                round1(rng.random_range(10.0..35.0))
            };
            let feels_like = round1(temperature + rng.random_range(-2.0..2.0));
            records.push(WeatherRecord {
                date,
                period,
                weather,
                temperature,
                feels_like,
            });
        }
    }
    records
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
