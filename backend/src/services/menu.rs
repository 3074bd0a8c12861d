//! Menu report service

use serde::Serialize;

use shared::models::MenuItem;
use shared::types::{PaginatedResponse, Pagination};

use crate::error::AppResult;
use crate::services::dataview::{contains_ci, filter_rows, paginate, TableQuery};
use crate::store::DataStore;

/// Rows per page in the menu table
const PAGE_SIZE: u32 = 15;

/// Menu report service
#[derive(Clone)]
pub struct MenuService {
    store: DataStore,
}

/// Menu table response
#[derive(Debug, Serialize)]
pub struct MenuReport {
    pub table: PaginatedResponse<MenuItem>,
}

impl MenuService {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Build the menu table: filter by item name or dietary kind, then
    /// slice the requested page
    pub fn report(&self, query: &TableQuery) -> AppResult<MenuReport> {
        let items = self.store.load_menu()?;

        let filtered = filter_rows(
            items,
            query.filter.as_deref(),
            None,
            |item: &MenuItem, needle| {
                contains_ci(&item.menuitem, needle) || contains_ci(item.kind.as_str(), needle)
            },
            |_| None,
        );

        let table = paginate(filtered, &Pagination::new(query.page, PAGE_SIZE));
        Ok(MenuReport { table })
    }
}
