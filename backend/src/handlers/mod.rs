//! HTTP handlers for the ZeroBite Restaurant Operations Dashboard

pub mod health;
pub mod inventory;
pub mod leftover;
pub mod menu;
pub mod prediction;
pub mod sales;
pub mod testdata;
pub mod trends;
pub mod weather;

pub use health::*;
pub use inventory::*;
pub use leftover::*;
pub use menu::*;
pub use prediction::*;
pub use sales::*;
pub use testdata::*;
pub use trends::*;
pub use weather::*;
