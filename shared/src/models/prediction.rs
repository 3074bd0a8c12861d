//! Demand forecast models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Forecast row for one menu item on one future date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    pub date: NaiveDate,
    pub menuitem: String,
    pub predicted_quantity: i64,
    pub available_stock: i64,
    pub demand: DemandLevel,
    pub cost_saved_gbp: Decimal,
    pub reason: String,
}

/// Whether predicted demand exceeds the stock on hand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DemandLevel {
    High,
    Normal,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Normal => "Normal",
        }
    }
}
