// src/models/import.rs

//! Spreadsheet import results returned by the backend.

use serde::{Deserialize, Serialize};

/// Per-row failure reported by a bulk import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based spreadsheet row number
    pub row: u32,

    pub error: String,

    /// Raw row contents as the backend saw them
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Outcome of a bulk spreadsheet import.
///
/// `created + updated + skipped + errors` should not exceed `total_rows`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSummary {
    pub total_rows: u32,
    pub created: u32,
    pub updated: u32,
    pub skipped: u32,
    pub errors: u32,
    pub error_details: Vec<RowError>,
}

impl ImportSummary {
    /// Rows the backend accounted for.
    pub fn processed(&self) -> u32 {
        self.created
            .saturating_add(self.updated)
            .saturating_add(self.skipped)
            .saturating_add(self.errors)
    }

    /// Whether the counts add up to no more than `total_rows`.
    pub fn is_consistent(&self) -> bool {
        self.processed() <= self.total_rows
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0 || !self.error_details.is_empty()
    }

    /// Rows written to the backend.
    pub fn succeeded(&self) -> u32 {
        self.created.saturating_add(self.updated)
    }
}
