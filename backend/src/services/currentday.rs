//! Current-day remaining stock and discount service
//!
//! Reports what is left of each menu item after all recorded sales and
//! prices it down for end-of-day clearance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shared::validation::validate_discount_percent;

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Current-day sales service
#[derive(Clone)]
pub struct CurrentDayService {
    store: DataStore,
}

/// Discount query parameters; zero percent leaves prices untouched
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountQuery {
    #[serde(default)]
    pub discount_percent: u32,
    #[serde(default = "default_start_time")]
    pub start_time: String,
}

fn default_start_time() -> String {
    "5PM".to_string()
}

/// Remaining stock for one menu item, with clearance pricing applied
#[derive(Debug, Serialize)]
pub struct RemainingItem {
    pub menuitem: String,
    pub price: Decimal,
    pub remaining_stock: i64,
    pub discounted_price: Decimal,
    pub reason: String,
}

impl CurrentDayService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Remaining stock per item (`available_stock` minus all quantities
    /// sold, floored at zero) with the requested discount applied
    pub fn report(&self, query: &DiscountQuery) -> AppResult<Vec<RemainingItem>> {
        validate_discount_percent(query.discount_percent)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let menu = self.store.load_menu()?;
        let sales = self.store.load_daily_sales()?;

        let mut sold_quantities: HashMap<String, i64> = HashMap::new();
        for day in &sales {
            for item in &day.items_sold {
                *sold_quantities.entry(item.menuitem.clone()).or_insert(0) += item.quantity_sold;
            }
        }

        let discount = Decimal::from(query.discount_percent);
        let factor = (Decimal::from(100) - discount) / Decimal::from(100);

        Ok(menu
            .into_iter()
            .map(|item| {
                let sold = sold_quantities.get(&item.menuitem).copied().unwrap_or(0);
                let remaining_stock = (item.available_stock - sold).max(0);
                let discounted_price = (item.price * factor).round_dp(2);
                let reason = if query.discount_percent == 0 {
                    "Normal".to_string()
                } else if query.discount_percent == 100 {
                    format!("Free to go items after {}", query.start_time)
                } else {
                    format!(
                        "Discount of {}% applicable from {}",
                        query.discount_percent, query.start_time
                    )
                };
                RemainingItem {
                    menuitem: item.menuitem,
                    price: item.price,
                    remaining_stock,
                    discounted_price,
                    reason,
                }
            })
            .collect())
    }
}
