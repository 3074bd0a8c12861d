//! Menu item models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish on the menu
///
/// `menuitem` is the natural key joined against by sales, leftover and
/// demand-forecast records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub menuitem: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub ingredient: String,
    pub inventories_used: Vec<String>,
    pub price: Decimal,
    pub available_stock: i64,
    pub prepared_date: NaiveDate,
    pub image_url: String,
}

/// Dietary classification of a menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Veg,
    NonVeg,
    Vegan,
}

impl MenuKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKind::Veg => "veg",
            MenuKind::NonVeg => "nonveg",
            MenuKind::Vegan => "vegan",
        }
    }
}
