//! Raw-material inventory models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw material held in stock
///
/// Quantities keep their unit inline ("120 kg", "40 pcs") exactly as the
/// documents store them; the generator enforces the purchase-cycle rule
/// `next_purchase_tentative_date = purchase_date + 30 days` and
/// `expiry_date > next_purchase_tentative_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub material: String,
    #[serde(rename = "type")]
    pub category: String,
    pub quantity: String,
    pub purchase_date: NaiveDate,
    pub remaining_stock: String,
    pub next_purchase_tentative_date: NaiveDate,
    pub expiry_date: NaiveDate,
}
