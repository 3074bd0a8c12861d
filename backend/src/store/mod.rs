//! Flat-JSON record store
//!
//! Each domain persists as one JSON document under the data directory,
//! wrapping its record list in a single top-level key. Every load re-reads
//! the file (no caching) and every save rewrites the document wholesale.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::models::{
    DailySales, InventoryItem, LeftoverRecord, MenuItem, TrendRecord, WeatherRecord,
};

use crate::error::{AppError, AppResult};

const MENU_FILE: &str = "menu.json";
const INVENTORY_FILE: &str = "inventory.json";
const SALES_FILE: &str = "sales.json";
const LEFTOVER_FILE: &str = "leftover.json";
const WEATHER_FILE: &str = "weather.json";
const TRENDS_FILE: &str = "trends.json";

/// Historical documents used "food_waste" before the schema settled on
/// "leftover"; reads accept both, writes emit only the canonical key.
const LEFTOVER_KEY: &str = "leftover";
const LEFTOVER_LEGACY_KEY: &str = "food_waste";

/// Handle on the JSON document directory
#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_menu(&self) -> AppResult<Vec<MenuItem>> {
        self.read_rows(MENU_FILE, &["menu"])
    }

    pub fn save_menu(&self, items: &[MenuItem]) -> AppResult<()> {
        self.write_rows(MENU_FILE, "menu", items)
    }

    pub fn load_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        self.read_rows(INVENTORY_FILE, &["inventory"])
    }

    pub fn save_inventory(&self, items: &[InventoryItem]) -> AppResult<()> {
        self.write_rows(INVENTORY_FILE, "inventory", items)
    }

    pub fn load_daily_sales(&self) -> AppResult<Vec<DailySales>> {
        self.read_rows(SALES_FILE, &["daily_sales"])
    }

    pub fn save_daily_sales(&self, days: &[DailySales]) -> AppResult<()> {
        self.write_rows(SALES_FILE, "daily_sales", days)
    }

    pub fn load_leftover(&self) -> AppResult<Vec<LeftoverRecord>> {
        self.read_rows(LEFTOVER_FILE, &[LEFTOVER_KEY, LEFTOVER_LEGACY_KEY])
    }

    pub fn save_leftover(&self, records: &[LeftoverRecord]) -> AppResult<()> {
        self.write_rows(LEFTOVER_FILE, LEFTOVER_KEY, records)
    }

    pub fn load_weather(&self) -> AppResult<Vec<WeatherRecord>> {
        self.read_rows(WEATHER_FILE, &["weather"])
    }

    pub fn save_weather(&self, records: &[WeatherRecord]) -> AppResult<()> {
        self.write_rows(WEATHER_FILE, "weather", records)
    }

    pub fn load_trends(&self) -> AppResult<Vec<TrendRecord>> {
        self.read_rows(TRENDS_FILE, &["trends"])
    }

    pub fn save_trends(&self, records: &[TrendRecord]) -> AppResult<()> {
        self.write_rows(TRENDS_FILE, "trends", records)
    }

    /// Read a document and extract the record list under the first key
    /// present. Records come back in on-disk order.
    fn read_rows<T: DeserializeOwned>(&self, file: &str, keys: &[&str]) -> AppResult<Vec<T>> {
        let path = self.data_dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AppError::DocumentNotFound(file.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let mut document: serde_json::Map<String, Value> =
            serde_json::from_str(&raw).map_err(|err| AppError::MalformedDocument {
                document: file.to_string(),
                detail: err.to_string(),
            })?;

        for key in keys {
            if let Some(rows) = document.remove(*key) {
                return serde_json::from_value(rows).map_err(|err| AppError::MalformedDocument {
                    document: file.to_string(),
                    detail: err.to_string(),
                });
            }
        }

        Err(AppError::MalformedDocument {
            document: file.to_string(),
            detail: format!("missing key \"{}\"", keys[0]),
        })
    }

    /// Rewrite a document wholesale under its canonical key
    fn write_rows<T: Serialize>(&self, file: &str, key: &str, rows: &[T]) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let rows = serde_json::to_value(rows)
            .map_err(|err| AppError::Internal(format!("serializing {}: {}", file, err)))?;
        let mut document = serde_json::Map::new();
        document.insert(key.to_string(), rows);

        let raw = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|err| AppError::Internal(format!("serializing {}: {}", file, err)))?;
        fs::write(self.data_dir.join(file), raw)?;
        Ok(())
    }
}
