//! Service layer for the dashboard core.
//!
//! This module contains the data-shaping logic for:
//! - Country lookups and flags (`countries`)
//! - Territory badges and filter values (`territory`)
//! - Course/commission text parsing (`course_parser`) and row expansion (`course_format`)
//! - Filter-to-query translation (`filters`)
//! - Pagination windows (`pagination`)
//! - Form guards (`validation`) and payload cleaning (`payload`)
//! - Spreadsheet import summaries and export rows (`import`)

pub mod countries;
pub mod course_format;
pub mod course_parser;
pub mod filters;
pub mod import;
pub mod pagination;
pub mod payload;
pub mod territory;
pub mod validation;

pub use course_format::{CourseFormatter, format_courses};
pub use filters::{build_export_query, build_query};
pub use pagination::Pager;
pub use territory::TerritoryDisplay;
pub use validation::Validation;
