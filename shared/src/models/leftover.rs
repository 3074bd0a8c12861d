//! Food waste / leftover models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wasted stock for one menu item on one day
///
/// Invariant (generation time): `wasted_quantity` never exceeds the item's
/// `available_stock - sold_quantity` for that date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeftoverRecord {
    pub date: NaiveDate,
    pub menuitem: String,
    pub sold_quantity: i64,
    pub wasted_quantity: i64,
    pub reason: WasteReason,
}

/// Why the stock was wasted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WasteReason {
    Overproduction,
    Spoilage,
    #[serde(rename = "Customer Return")]
    CustomerReturn,
}

impl WasteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteReason::Overproduction => "Overproduction",
            WasteReason::Spoilage => "Spoilage",
            WasteReason::CustomerReturn => "Customer Return",
        }
    }
}
