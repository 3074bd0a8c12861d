//! Shared types and models for the ZeroBite Restaurant Operations Dashboard
//!
//! This crate contains the record types persisted in the flat JSON
//! documents and the cross-cutting types (pagination, validation) used by
//! the backend report views.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
