//! Synthetic test-data generator
//!
//! Rewrites the inventory, menu, sales and leftover documents wholesale
//! with randomized but invariant-respecting data for the last N days.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::models::{DailySales, InventoryItem, ItemSale, LeftoverRecord, MenuItem, MenuKind, WasteReason};
use shared::validation::validate_inventory_dates;

use crate::error::{AppError, AppResult};
use crate::store::DataStore;

/// Raw-material catalogue: (material, category, unit)
const MATERIALS: [(&str, &str, &str); 30] = [
    ("Flour", "Dry Goods", "kg"),
    ("Eggs", "Dairy", "pcs"),
    ("Butter", "Dairy", "kg"),
    ("Beef (Sirloin)", "Meat", "kg"),
    ("Potatoes", "Vegetables", "kg"),
    ("Milk", "Dairy", "L"),
    ("Bread", "Bakery", "loaves"),
    ("Cheese", "Dairy", "kg"),
    ("Fish (Cod)", "Seafood", "kg"),
    ("Vegetables", "Fresh Produce", "kg"),
    ("Chicken Breast", "Meat", "kg"),
    ("Carrots", "Vegetables", "kg"),
    ("Pasta", "Dry Goods", "kg"),
    ("Onions", "Vegetables", "kg"),
    ("Salt", "Seasoning", "kg"),
    ("Black Pepper", "Seasoning", "kg"),
    ("Lettuce", "Vegetables", "kg"),
    ("Tomatoes", "Vegetables", "kg"),
    ("Olive Oil", "Condiments", "L"),
    ("Sugar", "Dry Goods", "kg"),
    ("Bacon", "Meat", "kg"),
    ("Mushrooms", "Vegetables", "kg"),
    ("Coffee Beans", "Beverages", "kg"),
    ("Tea Leaves", "Beverages", "kg"),
    ("Strawberries", "Fruits", "kg"),
    ("Lemons", "Fruits", "kg"),
    ("Ketchup", "Condiments", "L"),
    ("Mayonnaise", "Condiments", "L"),
    ("Honey", "Condiments", "kg"),
    ("Garlic", "Vegetables", "kg"),
];

/// Menu templates: (menuitem, kind, ingredient, inventories used)
const MENU_TEMPLATES: [(&str, MenuKind, &str, &[&str]); 8] = [
    (
        "Classic Omelette",
        MenuKind::Veg,
        "Eggs, butter, salt, black pepper",
        &["Eggs", "Butter", "Salt", "Black Pepper"],
    ),
    (
        "Vegetable Pasta",
        MenuKind::Veg,
        "Pasta, tomatoes, onions, carrots, olive oil",
        &["Pasta", "Tomatoes", "Onions", "Carrots", "Olive Oil"],
    ),
    (
        "Grilled Chicken Breast",
        MenuKind::NonVeg,
        "Chicken breast, black pepper, salt, olive oil",
        &["Chicken Breast", "Black Pepper", "Salt", "Olive Oil"],
    ),
    (
        "Vegan Stir Fry",
        MenuKind::Vegan,
        "Broccoli, carrots, onions, garlic, olive oil",
        &["Carrots", "Onions", "Garlic", "Olive Oil"],
    ),
    (
        "Beef Sirloin Steak",
        MenuKind::NonVeg,
        "Beef (Sirloin), salt, black pepper",
        &["Beef (Sirloin)", "Salt", "Black Pepper"],
    ),
    (
        "Cheese Sandwich",
        MenuKind::Veg,
        "Bread, cheese, butter",
        &["Bread", "Cheese", "Butter"],
    ),
    (
        "Fruit Salad",
        MenuKind::Vegan,
        "Strawberries, lemons",
        &["Strawberries", "Lemons"],
    ),
    (
        "Fish and Chips",
        MenuKind::NonVeg,
        "Fish (Cod), potatoes, salt",
        &["Fish (Cod)", "Potatoes", "Salt"],
    ),
];

const WASTE_REASONS: [WasteReason; 3] = [
    WasteReason::Overproduction,
    WasteReason::Spoilage,
    WasteReason::CustomerReturn,
];

/// Test-data generation service
#[derive(Clone)]
pub struct TestDataService {
    store: DataStore,
}

/// Generation window input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateDataInput {
    #[serde(default = "default_days")]
    #[validate(range(min = 7, max = 180))]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}

/// What a generation run produced
#[derive(Debug, Serialize)]
pub struct GenerateDataSummary {
    pub days: i64,
    pub inventory_items: usize,
    pub menu_items: usize,
    pub sales_days: usize,
    pub leftover_records: usize,
}

impl TestDataService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Regenerate the inventory, menu, sales and leftover documents for
    /// the last `days` days
    pub fn generate(&self, input: &GenerateDataInput) -> AppResult<GenerateDataSummary> {
        input.validate().map_err(AppError::from)?;

        let today = Local::now().date_naive();
        let mut rng = rand::rng();

        let inventory = generate_inventory(today, input.days, &mut rng);
        for item in &inventory {
            validate_inventory_dates(
                item.purchase_date,
                item.next_purchase_tentative_date,
                item.expiry_date,
            )
            .map_err(|msg| AppError::Internal(format!("inventory generation: {}", msg)))?;
        }

        let menu = generate_menu(today, input.days, &mut rng);
        let sales = generate_sales(&menu, today, input.days, &mut rng);
        let leftover = generate_leftover(&menu, &sales, &mut rng);

        self.store.save_inventory(&inventory)?;
        self.store.save_menu(&menu)?;
        self.store.save_daily_sales(&sales)?;
        self.store.save_leftover(&leftover)?;

        tracing::info!(
            days = input.days,
            leftover = leftover.len(),
            "test data generated"
        );

        Ok(GenerateDataSummary {
            days: input.days,
            inventory_items: inventory.len(),
            menu_items: menu.len(),
            sales_days: sales.len(),
            leftover_records: leftover.len(),
        })
    }
}

/// One inventory row per catalogue material, purchased 10..=days days ago
/// with the 30-day repurchase cycle and a later expiry
pub fn generate_inventory(today: NaiveDate, days: i64, rng: &mut impl Rng) -> Vec<InventoryItem> {
    MATERIALS
        .iter()
        .map(|(material, category, unit)| {
            let purchase_date = today - Duration::days(rng.random_range(10..=days.max(10)));
            let next_purchase_tentative_date = purchase_date + Duration::days(30);
            let expiry_date = next_purchase_tentative_date + Duration::days(rng.random_range(1..=90));
            let quantity = rng.random_range(100..=200);
            let remaining = rng.random_range(1..=quantity);
            InventoryItem {
                material: material.to_string(),
                category: category.to_string(),
                quantity: format!("{} {}", quantity, unit),
                purchase_date,
                remaining_stock: format!("{} {}", remaining, unit),
                next_purchase_tentative_date,
                expiry_date,
            }
        })
        .collect()
}

/// One menu row per template (menuitem stays unique), prepared on one of
/// the window's dates
pub fn generate_menu(today: NaiveDate, days: i64, rng: &mut impl Rng) -> Vec<MenuItem> {
    MENU_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, (menuitem, kind, ingredient, inventories))| {
            let prepared_date = today - Duration::days(index as i64 % days);
            let price = Decimal::new(rng.random_range(500..3000), 2);
            MenuItem {
                menuitem: menuitem.to_string(),
                kind: *kind,
                ingredient: ingredient.to_string(),
                inventories_used: inventories.iter().map(|s| s.to_string()).collect(),
                price,
                available_stock: rng.random_range(50..=150),
                prepared_date,
                image_url: format!(
                    "https://placehold.co/120x120?text={}",
                    menuitem.replace(' ', "+")
                ),
            }
        })
        .collect()
}

/// Daily sales over the window: every item can sell 0..=stock units per
/// day; the day total always equals the sum of its item totals
pub fn generate_sales(
    menu: &[MenuItem],
    today: NaiveDate,
    days: i64,
    rng: &mut impl Rng,
) -> Vec<DailySales> {
    (0..days)
        .map(|offset| {
            let date = today - Duration::days(days - offset - 1);
            let mut items_sold = Vec::new();
            let mut total_sales_gbp = Decimal::ZERO;
            for item in menu {
                let quantity = rng.random_range(0..=item.available_stock);
                if quantity > 0 {
                    let item_total = (item.price * Decimal::from(quantity)).round_dp(2);
                    total_sales_gbp += item_total;
                    items_sold.push(ItemSale {
                        menuitem: item.menuitem.clone(),
                        quantity_sold: quantity,
                        total_sales_gbp: item_total,
                    });
                }
            }
            DailySales {
                date,
                total_sales_gbp,
                items_sold,
            }
        })
        .collect()
}

/// Leftover records: where a day leaves unsold stock, roughly a third of
/// the (date, item) pairs waste between one unit and the full headroom
pub fn generate_leftover(
    menu: &[MenuItem],
    sales: &[DailySales],
    rng: &mut impl Rng,
) -> Vec<LeftoverRecord> {
    let mut records = Vec::new();
    for day in sales {
        for item in menu {
            let sold_quantity = day
                .items_sold
                .iter()
                .find(|sale| sale.menuitem == item.menuitem)
                .map(|sale| sale.quantity_sold)
                .unwrap_or(0);
            let headroom = item.available_stock - sold_quantity;
            if headroom > 0 && rng.random_bool(0.3) {
                records.push(LeftoverRecord {
                    date: day.date,
                    menuitem: item.menuitem.clone(),
                    sold_quantity,
                    wasted_quantity: rng.random_range(1..=headroom),
                    reason: WASTE_REASONS[rng.random_range(0..WASTE_REASONS.len())],
                });
            }
        }
    }
    records
}
