//! Demand forecast service
//!
//! A scoring heuristic, not a statistical model: recent sales scaled by
//! social-trend and weather multipliers plus a little noise. The formula
//! is kept exactly as the dashboard has always shown it.

use chrono::{Duration, Local};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use shared::models::{
    DailySales, DemandForecast, DemandLevel, MenuItem, Period, TrendRecord, TrendStatus,
    WeatherKind, WeatherRecord,
};

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Days of sales history averaged per item
const HISTORY_DAYS: usize = 7;

/// Demand forecast service
#[derive(Clone)]
pub struct PredictionService {
    store: DataStore,
}

/// Forecast horizon query
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForecastQuery {
    #[serde(default = "default_days")]
    #[validate(range(min = 1, max = 14))]
    pub days: i64,
}

fn default_days() -> i64 {
    7
}

/// Inputs to the demand score for one (date, item) pair
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSignals {
    pub average_daily_sales: f64,
    pub facebook_trending: bool,
    pub rain_periods: u32,
    pub sunny_periods: u32,
    pub noise: f64,
}

/// The demand formula: average sales, times 1.2 when the item trends on
/// Facebook, times an accumulated weather boost (+0.1 per Rain period,
/// +0.05 per Sunny period), plus noise, truncated toward zero
pub fn predicted_quantity(signals: &DemandSignals) -> i64 {
    let trend_multiplier = if signals.facebook_trending { 1.2 } else { 1.0 };
    let weather_multiplier =
        1.0 + 0.1 * signals.rain_periods as f64 + 0.05 * signals.sunny_periods as f64;
    (signals.average_daily_sales * trend_multiplier * weather_multiplier + signals.noise) as i64
}

impl PredictionService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Forecast demand for every menu item over the next `days` dates
    ///
    /// Missing documents degrade to empty inputs: no menu means no rows,
    /// no history means the random fallback average, no trends or weather
    /// means no multipliers.
    pub fn forecast(&self, query: &ForecastQuery) -> AppResult<Vec<DemandForecast>> {
        query.validate().map_err(AppError::from)?;

        let menu = self.load_or_empty(self.store.load_menu())?;
        let sales = self.load_or_empty(self.store.load_daily_sales())?;
        let trends = self.load_or_empty(self.store.load_trends())?;
        let weather = self.load_or_empty(self.store.load_weather())?;

        let trends_by_item: HashMap<&str, &TrendRecord> = trends
            .iter()
            .map(|record| (record.menuitem.as_str(), record))
            .collect();
        let weather_by_slot: HashMap<(chrono::NaiveDate, Period), &WeatherRecord> = weather
            .iter()
            .map(|record| ((record.date, record.period), record))
            .collect();
        let history: &[DailySales] = &sales[sales.len().saturating_sub(HISTORY_DAYS)..];

        let mut rng = rand::rng();
        let today = Local::now().date_naive();
        let mut forecast = Vec::new();

        for offset in 0..query.days {
            let date = today + Duration::days(offset);
            for item in &menu {
                forecast.push(self.forecast_item(
                    item,
                    date,
                    history,
                    trends_by_item.get(item.menuitem.as_str()).copied(),
                    &weather_by_slot,
                    &mut rng,
                ));
            }
        }
        Ok(forecast)
    }

    fn forecast_item(
        &self,
        item: &MenuItem,
        date: chrono::NaiveDate,
        history: &[DailySales],
        trend: Option<&TrendRecord>,
        weather_by_slot: &HashMap<(chrono::NaiveDate, Period), &WeatherRecord>,
        rng: &mut impl Rng,
    ) -> DemandForecast {
        let quantities: Vec<i64> = history
            .iter()
            .flat_map(|day| day.items_sold.iter())
            .filter(|sale| sale.menuitem == item.menuitem)
            .map(|sale| sale.quantity_sold)
            .collect();
        let average_daily_sales = if quantities.is_empty() {
            rng.random_range(5..=15) as f64
        } else {
            quantities.iter().sum::<i64>() as f64 / quantities.len() as f64
        };

        let facebook_trending = trend
            .map(|record| record.facebook_status == TrendStatus::Trending)
            .unwrap_or(false);

        let mut rain_periods = 0;
        let mut sunny_periods = 0;
        let mut weather_labels: Vec<&str> = Vec::new();
        for period in [Period::Forenoon, Period::Afternoon] {
            match weather_by_slot.get(&(date, period)).map(|w| w.weather) {
                Some(WeatherKind::Rain) => {
                    rain_periods += 1;
                    if !weather_labels.contains(&"Rainy") {
                        weather_labels.push("Rainy");
                    }
                }
                Some(WeatherKind::Sunny) => {
                    sunny_periods += 1;
                    if !weather_labels.contains(&"Sunny") {
                        weather_labels.push("Sunny");
                    }
                }
                _ => {}
            }
        }

        let signals = DemandSignals {
            average_daily_sales,
            facebook_trending,
            rain_periods,
            sunny_periods,
            noise: rng.random_range(-2.0..2.0),
        };
        let predicted = predicted_quantity(&signals);

        let demand = if predicted > item.available_stock {
            DemandLevel::High
        } else {
            DemandLevel::Normal
        };
        let cost_saved_gbp =
            (Decimal::from((item.available_stock - predicted).max(0)) * item.price).round_dp(2);

        let mut reasons: Vec<String> = Vec::new();
        if let Some(record) = trend {
            for (platform, status) in record.platform_statuses() {
                if status == TrendStatus::Trending {
                    reasons.push(format!("{} Trending", platform));
                }
            }
        }
        if !weather_labels.is_empty() {
            reasons.push(format!("Weather: {}", weather_labels.join(", ")));
        }
        let reason = if reasons.is_empty() {
            "Normal".to_string()
        } else {
            reasons.join("; ")
        };

        DemandForecast {
            date,
            menuitem: item.menuitem.clone(),
            predicted_quantity: predicted,
            available_stock: item.available_stock,
            demand,
            cost_saved_gbp,
            reason,
        }
    }

    /// Treat a missing document as an empty record list
    fn load_or_empty<T>(&self, result: AppResult<Vec<T>>) -> AppResult<Vec<T>> {
        match result {
            Ok(rows) => Ok(rows),
            Err(AppError::DocumentNotFound(_)) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}
