//! Food waste / leftover report service
//!
//! The loss join runs before anything else: each leftover record gains an
//! `estimated_loss_gbp` derived from the menu price index, and the filter,
//! table and both charts all see the joined rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use shared::models::{LeftoverRecord, MenuItem, WasteReason};
use shared::types::{PaginatedResponse, Pagination};

use crate::error::{AppError, AppResult};
use crate::services::dataview::{
    contains_ci, distinct_dates, filter_rows, paginate, sum_by_date, sum_by_key, DateTotal,
    GroupTotal, TableQuery,
};
use crate::store::DataStore;

/// Rows per page in the leftover table
const PAGE_SIZE: u32 = 10;

/// Leftover report service
#[derive(Clone)]
pub struct LeftoverService {
    store: DataStore,
}

/// A leftover record joined with its estimated loss
#[derive(Debug, Clone, Serialize)]
pub struct LeftoverRow {
    pub date: NaiveDate,
    pub menuitem: String,
    pub sold_quantity: i64,
    pub wasted_quantity: i64,
    pub reason: WasteReason,
    pub estimated_loss_gbp: Decimal,
}

/// Leftover response: table page, loss charts, dropdown dates
#[derive(Debug, Serialize)]
pub struct LeftoverReport {
    pub table: PaginatedResponse<LeftoverRow>,
    pub loss_per_item: Vec<GroupTotal>,
    pub loss_by_date: Vec<DateTotal>,
    pub dates: Vec<NaiveDate>,
}

impl LeftoverService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Build the leftover view: join prices, filter by item name or waste
    /// reason and exact date, page the table, and rank/series the losses
    /// over the full filtered set
    pub fn report(&self, query: &TableQuery) -> AppResult<LeftoverReport> {
        let leftovers = self.store.load_leftover()?;
        let prices = self.price_index()?;

        let rows = with_estimated_loss(leftovers, &prices);
        let dates = distinct_dates(&rows, |row| row.date);

        let filtered = filter_rows(
            rows,
            query.filter.as_deref(),
            query.date,
            |row: &LeftoverRow, needle| {
                contains_ci(&row.menuitem, needle) || contains_ci(row.reason.as_str(), needle)
            },
            |row| Some(row.date),
        );

        let loss_per_item = sum_by_key(
            &filtered,
            |row| row.menuitem.clone(),
            |row| row.estimated_loss_gbp,
        );
        let loss_by_date = sum_by_date(&filtered, |row| row.date, |row| row.estimated_loss_gbp);

        let table = paginate(filtered, &Pagination::new(query.page, PAGE_SIZE));
        Ok(LeftoverReport {
            table,
            loss_per_item,
            loss_by_date,
            dates,
        })
    }

    /// Menu price index keyed by item name; a missing menu document
    /// degrades to an empty index (every join misses, loss 0)
    fn price_index(&self) -> AppResult<HashMap<String, Decimal>> {
        let menu = match self.store.load_menu() {
            Ok(menu) => menu,
            Err(AppError::DocumentNotFound(_)) => Vec::new(),
            Err(err) => return Err(err),
        };
        Ok(menu
            .into_iter()
            .map(|item: MenuItem| (item.menuitem, item.price))
            .collect())
    }
}

/// Row-wise left join on `menuitem`: estimated loss is price times wasted
/// quantity, with a missing price counting as zero
pub fn with_estimated_loss(
    leftovers: Vec<LeftoverRecord>,
    prices: &HashMap<String, Decimal>,
) -> Vec<LeftoverRow> {
    leftovers
        .into_iter()
        .map(|record| {
            let price = prices
                .get(&record.menuitem)
                .copied()
                .unwrap_or(Decimal::ZERO);
            LeftoverRow {
                estimated_loss_gbp: price * Decimal::from(record.wasted_quantity),
                date: record.date,
                menuitem: record.menuitem,
                sold_quantity: record.sold_quantity,
                wasted_quantity: record.wasted_quantity,
                reason: record.reason,
            }
        })
        .collect()
}
