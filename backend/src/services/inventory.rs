//! Inventory report service

use serde::Serialize;

use shared::models::InventoryItem;
use shared::types::{PaginatedResponse, Pagination};

use crate::error::AppResult;
use crate::services::dataview::{contains_ci, filter_rows, paginate, TableQuery};
use crate::store::DataStore;

/// Rows per page in the inventory table
const PAGE_SIZE: u32 = 15;

/// Inventory report service
#[derive(Clone)]
pub struct InventoryService {
    store: DataStore,
}

/// Inventory table response
#[derive(Debug, Serialize)]
pub struct InventoryReport {
    pub table: PaginatedResponse<InventoryItem>,
}

impl InventoryService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Build the inventory table: filter by material or category, then
    /// slice the requested page
    pub fn report(&self, query: &TableQuery) -> AppResult<InventoryReport> {
        let items = self.store.load_inventory()?;

        let filtered = filter_rows(
            items,
            query.filter.as_deref(),
            None,
            |item: &InventoryItem, needle| {
                contains_ci(&item.material, needle) || contains_ci(&item.category, needle)
            },
            |_| None,
        );

        let table = paginate(filtered, &Pagination::new(query.page, PAGE_SIZE));
        Ok(InventoryReport { table })
    }
}
