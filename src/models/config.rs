//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// List paging behavior
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Display strings for rendered rows
    #[serde(default)]
    pub display: DisplayConfig,

    /// Spreadsheet import/export limits
    #[serde(default)]
    pub import: ImportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.pagination.delta == 0 {
            return Err(AppError::validation("pagination.delta must be > 0"));
        }
        if self.pagination.default_page_size == 0 {
            return Err(AppError::validation(
                "pagination.default_page_size must be > 0",
            ));
        }
        if !self
            .pagination
            .page_size_options
            .contains(&self.pagination.default_page_size)
        {
            return Err(AppError::validation(format!(
                "pagination.default_page_size {} is not one of page_size_options",
                self.pagination.default_page_size
            )));
        }
        if self.display.commission_placeholder.trim().is_empty() {
            return Err(AppError::validation(
                "display.commission_placeholder is empty",
            ));
        }
        if self.import.max_file_size_bytes == 0 {
            return Err(AppError::validation(
                "import.max_file_size_bytes must be > 0",
            ));
        }
        if self.import.allowed_extensions.is_empty() {
            return Err(AppError::validation("No import file extensions allowed"));
        }
        Ok(())
    }
}

/// Paging settings for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Number of page links shown on each side of the current page
    #[serde(default = "defaults::delta")]
    pub delta: u32,

    /// Page size used when the UI has not picked one
    #[serde(default = "defaults::default_page_size")]
    pub default_page_size: u32,

    /// Page sizes offered in the page-size dropdown
    #[serde(default = "defaults::page_size_options")]
    pub page_size_options: Vec<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            delta: defaults::delta(),
            default_page_size: defaults::default_page_size(),
            page_size_options: defaults::page_size_options(),
        }
    }
}

/// Display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Shown in place of a missing commission
    #[serde(default = "defaults::commission_placeholder")]
    pub commission_placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            commission_placeholder: defaults::commission_placeholder(),
        }
    }
}

/// Spreadsheet import/export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Largest accepted upload, in bytes
    #[serde(default = "defaults::max_file_size_bytes")]
    pub max_file_size_bytes: u64,

    /// Accepted file extensions, lowercase without the dot
    #[serde(default = "defaults::allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Prefix for generated export file names
    #[serde(default = "defaults::export_prefix")]
    pub export_prefix: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: defaults::max_file_size_bytes(),
            allowed_extensions: defaults::allowed_extensions(),
            export_prefix: defaults::export_prefix(),
        }
    }
}

mod defaults {
    // Pagination defaults
    pub fn delta() -> u32 {
        2
    }
    pub fn default_page_size() -> u32 {
        10
    }
    pub fn page_size_options() -> Vec<u32> {
        vec![10, 25, 50, 100]
    }

    // Display defaults
    pub fn commission_placeholder() -> String {
        "N/A".into()
    }

    // Import defaults
    pub fn max_file_size_bytes() -> u64 {
        5 * 1024 * 1024
    }
    pub fn allowed_extensions() -> Vec<String> {
        vec!["xlsx".into(), "xls".into()]
    }
    pub fn export_prefix() -> String {
        "export".into()
    }
}
