// src/models/mod.rs

//! Domain models for the dashboard core.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod config;
mod course;
mod filter;
mod import;
mod records;

// Re-export all public types
pub use config::{Config, DisplayConfig, ImportConfig, PaginationConfig};
pub use course::{CommissionValue, Course, DisplayRow, ParsedCourse};
pub use filter::{FilterState, QueryParams, QueryValue};
pub use import::{ImportSummary, RowError};
pub use records::{Institution, Provider, ProviderKind};
