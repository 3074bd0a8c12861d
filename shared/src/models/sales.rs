//! Daily sales models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales for one day
///
/// Invariant: `total_sales_gbp` equals the sum of the item totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_sales_gbp: Decimal,
    pub items_sold: Vec<ItemSale>,
}

/// One menu item's sales within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSale {
    pub menuitem: String,
    pub quantity_sold: i64,
    pub total_sales_gbp: Decimal,
}
