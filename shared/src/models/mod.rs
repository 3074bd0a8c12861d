//! Domain models for the ZeroBite Restaurant Operations Dashboard

mod inventory;
mod leftover;
mod menu;
mod prediction;
mod sales;
mod trends;
mod weather;

pub use inventory::*;
pub use leftover::*;
pub use menu::*;
pub use prediction::*;
pub use sales::*;
pub use trends::*;
pub use weather::*;
