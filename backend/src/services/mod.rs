//! Report services for the ZeroBite Restaurant Operations Dashboard

pub mod currentday;
pub mod dataview;
pub mod inventory;
pub mod leftover;
pub mod menu;
pub mod prediction;
pub mod sales;
pub mod testdata;
pub mod trends;
pub mod weather;

pub use currentday::CurrentDayService;
pub use inventory::InventoryService;
pub use leftover::LeftoverService;
pub use menu::MenuService;
pub use prediction::PredictionService;
pub use sales::SalesService;
pub use testdata::TestDataService;
pub use trends::TrendsService;
pub use weather::WeatherService;
