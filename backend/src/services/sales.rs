//! Sales report services
//!
//! Two views share the sales document: the daily trend chart and the
//! per-item sales-details table with its quantity time series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::models::DailySales;
use shared::types::{PaginatedResponse, Pagination};

use crate::error::AppResult;
use crate::services::dataview::{
    contains_ci, distinct_dates, filter_rows, paginate, sum_by_date, sum_by_date_and_key,
    DateKeyTotal, TableQuery,
};
use crate::store::DataStore;

/// Rows per page in the sales-details table
const PAGE_SIZE: u32 = 10;

/// Sales report service
#[derive(Clone)]
pub struct SalesService {
    store: DataStore,
}

/// One point on the daily sales trend chart
#[derive(Debug, Serialize)]
pub struct SalesTrendPoint {
    pub date: NaiveDate,
    pub total_sales_gbp: Decimal,
}

/// One menu item's sales on one day, flattened for the details table
#[derive(Debug, Clone, Serialize)]
pub struct SalesDetailRow {
    pub date: NaiveDate,
    pub menuitem: String,
    pub quantity_sold: i64,
    pub total_sales_gbp: Decimal,
}

/// Sales-details response: table page, quantity series, dropdown dates
#[derive(Debug, Serialize)]
pub struct SalesDetailsReport {
    pub table: PaginatedResponse<SalesDetailRow>,
    pub quantity_trend: Vec<DateKeyTotal>,
    pub dates: Vec<NaiveDate>,
}

impl SalesService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Daily sales totals, ascending by date
    pub fn trend(&self) -> AppResult<Vec<SalesTrendPoint>> {
        let days = self.store.load_daily_sales()?;
        let points = sum_by_date(&days, |day| day.date, |day| day.total_sales_gbp);
        Ok(points
            .into_iter()
            .map(|point| SalesTrendPoint {
                date: point.date,
                total_sales_gbp: point.total,
            })
            .collect())
    }

    /// Build the sales-details view: flatten, filter by item name and
    /// exact date, page the table, and aggregate quantity per (date, item)
    /// over the full filtered set
    pub fn details(&self, query: &TableQuery) -> AppResult<SalesDetailsReport> {
        let days = self.store.load_daily_sales()?;
        let rows = flatten_daily_sales(days);
        let dates = distinct_dates(&rows, |row| row.date);

        let filtered = filter_rows(
            rows,
            query.filter.as_deref(),
            query.date,
            |row: &SalesDetailRow, needle| contains_ci(&row.menuitem, needle),
            |row| Some(row.date),
        );

        let quantity_trend = sum_by_date_and_key(
            &filtered,
            |row| row.date,
            |row| row.menuitem.clone(),
            |row| Decimal::from(row.quantity_sold),
        );

        let table = paginate(filtered, &Pagination::new(query.page, PAGE_SIZE));
        Ok(SalesDetailsReport {
            table,
            quantity_trend,
            dates,
        })
    }
}

/// Flatten the nested daily documents into one row per (date, item),
/// preserving document order
pub fn flatten_daily_sales(days: Vec<DailySales>) -> Vec<SalesDetailRow> {
    days.into_iter()
        .flat_map(|day| {
            let date = day.date;
            day.items_sold.into_iter().map(move |item| SalesDetailRow {
                date,
                menuitem: item.menuitem,
                quantity_sold: item.quantity_sold,
                total_sales_gbp: item.total_sales_gbp,
            })
        })
        .collect()
}
