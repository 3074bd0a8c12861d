//! Validation utilities for the ZeroBite Restaurant Operations Dashboard
//!
//! Checks the generation-time invariants of the JSON documents and the
//! bounds on user-supplied report inputs.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{DailySales, TrendStatus};

// ============================================================================
// Record Invariants
// ============================================================================

/// Validate a menu price is non-negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate an available-stock count is non-negative
pub fn validate_stock(stock: i64) -> Result<(), &'static str> {
    if stock < 0 {
        return Err("Available stock cannot be negative");
    }
    Ok(())
}

/// Parse a quantity-with-unit string such as "120 kg" or "40 pcs"
pub fn parse_quantity_with_unit(quantity: &str) -> Result<(i64, &str), &'static str> {
    let mut parts = quantity.splitn(2, ' ');
    let amount = parts
        .next()
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or("Quantity must start with a whole number")?;
    let unit = parts.next().filter(|u| !u.is_empty()).ok_or("Quantity must carry a unit")?;
    if amount < 0 {
        return Err("Quantity cannot be negative");
    }
    Ok((amount, unit))
}

/// Validate the inventory purchase cycle:
/// next purchase is exactly 30 days after purchase, expiry is after that
pub fn validate_inventory_dates(
    purchase_date: NaiveDate,
    next_purchase_tentative_date: NaiveDate,
    expiry_date: NaiveDate,
) -> Result<(), &'static str> {
    if next_purchase_tentative_date != purchase_date + Duration::days(30) {
        return Err("Next purchase date must be 30 days after purchase");
    }
    if expiry_date <= next_purchase_tentative_date {
        return Err("Expiry date must fall after the next purchase date");
    }
    Ok(())
}

/// Validate a day's total equals the sum of its item totals
pub fn validate_daily_sales_total(day: &DailySales) -> Result<(), &'static str> {
    let item_total: Decimal = day.items_sold.iter().map(|item| item.total_sales_gbp).sum();
    if item_total != day.total_sales_gbp {
        return Err("Daily total must equal the sum of item totals");
    }
    Ok(())
}

/// Validate wasted quantity stays within the unsold headroom for the day
pub fn validate_leftover_quantities(
    available_stock: i64,
    sold_quantity: i64,
    wasted_quantity: i64,
) -> Result<(), &'static str> {
    if wasted_quantity < 0 {
        return Err("Wasted quantity cannot be negative");
    }
    if wasted_quantity > available_stock - sold_quantity {
        return Err("Wasted quantity exceeds unsold stock");
    }
    Ok(())
}

/// Validate a trend score sits in the range its status allows
///
/// Trending scores live in [10, 100]; Non-Trending and Similar in [0, 40].
pub fn validate_trend_score(status: TrendStatus, score: i64) -> Result<(), &'static str> {
    let ok = match status {
        TrendStatus::Trending => (10..=100).contains(&score),
        TrendStatus::NonTrending | TrendStatus::Similar => (0..=40).contains(&score),
    };
    if ok {
        Ok(())
    } else {
        Err("Trend score out of range for status")
    }
}

// ============================================================================
// Report Input Bounds
// ============================================================================

/// Validate a demand-forecast horizon (1 to 14 days)
pub fn validate_forecast_days(days: i64) -> Result<(), &'static str> {
    if !(1..=14).contains(&days) {
        return Err("Forecast horizon must be between 1 and 14 days");
    }
    Ok(())
}

/// Validate a test-data generation window (7 to 180 days)
pub fn validate_generator_days(days: i64) -> Result<(), &'static str> {
    if !(7..=180).contains(&days) {
        return Err("Generation window must be between 7 and 180 days");
    }
    Ok(())
}

/// Validate a discount percentage (0 disables the discount)
pub fn validate_discount_percent(percent: u32) -> Result<(), &'static str> {
    if percent > 100 {
        return Err("Discount cannot exceed 100%");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemSale;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(dec("4.50")).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(dec("-0.01")).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(150).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_parse_quantity_with_unit() {
        assert_eq!(parse_quantity_with_unit("120 kg"), Ok((120, "kg")));
        assert_eq!(parse_quantity_with_unit("40 pcs"), Ok((40, "pcs")));
        assert_eq!(parse_quantity_with_unit("3 loaves"), Ok((3, "loaves")));
        assert!(parse_quantity_with_unit("kg").is_err());
        assert!(parse_quantity_with_unit("120").is_err());
        assert!(parse_quantity_with_unit("12.5 kg").is_err());
    }

    #[test]
    fn test_validate_inventory_dates_valid() {
        assert!(validate_inventory_dates(
            date("2025-07-01"),
            date("2025-07-31"),
            date("2025-09-15"),
        )
        .is_ok());
    }

    #[test]
    fn test_validate_inventory_dates_wrong_cycle() {
        // 29 days between purchase and next purchase
        assert!(validate_inventory_dates(
            date("2025-07-01"),
            date("2025-07-30"),
            date("2025-09-15"),
        )
        .is_err());
    }

    #[test]
    fn test_validate_inventory_dates_expiry_too_early() {
        assert!(validate_inventory_dates(
            date("2025-07-01"),
            date("2025-07-31"),
            date("2025-07-31"),
        )
        .is_err());
    }

    #[test]
    fn test_validate_daily_sales_total() {
        let day = DailySales {
            date: date("2025-08-01"),
            total_sales_gbp: dec("37.50"),
            items_sold: vec![
                ItemSale {
                    menuitem: "Soup".to_string(),
                    quantity_sold: 3,
                    total_sales_gbp: dec("12.00"),
                },
                ItemSale {
                    menuitem: "Fish and Chips".to_string(),
                    quantity_sold: 2,
                    total_sales_gbp: dec("25.50"),
                },
            ],
        };
        assert!(validate_daily_sales_total(&day).is_ok());

        let mut wrong = day;
        wrong.total_sales_gbp = dec("40.00");
        assert!(validate_daily_sales_total(&wrong).is_err());
    }

    #[test]
    fn test_validate_daily_sales_total_empty_day() {
        let day = DailySales {
            date: date("2025-08-01"),
            total_sales_gbp: Decimal::ZERO,
            items_sold: vec![],
        };
        assert!(validate_daily_sales_total(&day).is_ok());
    }

    #[test]
    fn test_validate_leftover_quantities() {
        assert!(validate_leftover_quantities(100, 60, 40).is_ok());
        assert!(validate_leftover_quantities(100, 60, 41).is_err());
        assert!(validate_leftover_quantities(100, 60, -1).is_err());
        assert!(validate_leftover_quantities(100, 100, 0).is_ok());
    }

    #[test]
    fn test_validate_trend_score() {
        assert!(validate_trend_score(TrendStatus::Trending, 10).is_ok());
        assert!(validate_trend_score(TrendStatus::Trending, 100).is_ok());
        assert!(validate_trend_score(TrendStatus::Trending, 9).is_err());
        assert!(validate_trend_score(TrendStatus::NonTrending, 0).is_ok());
        assert!(validate_trend_score(TrendStatus::NonTrending, 40).is_ok());
        assert!(validate_trend_score(TrendStatus::NonTrending, 41).is_err());
        assert!(validate_trend_score(TrendStatus::Similar, 41).is_err());
    }

    #[test]
    fn test_validate_forecast_days() {
        assert!(validate_forecast_days(1).is_ok());
        assert!(validate_forecast_days(7).is_ok());
        assert!(validate_forecast_days(14).is_ok());
        assert!(validate_forecast_days(0).is_err());
        assert!(validate_forecast_days(15).is_err());
    }

    #[test]
    fn test_validate_generator_days() {
        assert!(validate_generator_days(7).is_ok());
        assert!(validate_generator_days(180).is_ok());
        assert!(validate_generator_days(6).is_err());
        assert!(validate_generator_days(181).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(50).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }
}
