// src/services/territory.rs

//! Territory resolution for badges and filters.
//!
//! A territory token is "Global" (any case), a two-letter country code, or a
//! country display name.

use serde::Serialize;

use super::countries;

/// Label shown for worldwide territories.
pub const GLOBAL_LABEL: &str = "Global";

/// Glyph shown next to [`GLOBAL_LABEL`].
pub const GLOBAL_FLAG: &str = "🌐";

/// Legacy code still found in stored data; shown with the `GB` flag.
const LEGACY_UK: &str = "UK";
const UNITED_KINGDOM: &str = "GB";

/// How a territory token should be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryDisplay {
    pub is_global: bool,
    pub display_text: String,
    pub country_code: String,
    pub flag: String,
}

impl TerritoryDisplay {
    fn global() -> Self {
        Self {
            is_global: true,
            display_text: GLOBAL_LABEL.to_string(),
            country_code: String::new(),
            flag: GLOBAL_FLAG.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.is_global && self.display_text.is_empty()
    }

    /// Badge text, e.g. `"🇦🇺 AU"` or `"🌐 Global"`.
    pub fn badge(&self) -> String {
        if self.flag.is_empty() {
            self.display_text.clone()
        } else {
            format!("{} {}", self.flag, self.display_text)
        }
    }
}

/// Resolve a raw territory token. Never fails.
pub fn resolve(raw: &str) -> TerritoryDisplay {
    let value = raw.trim();
    if value.is_empty() {
        return TerritoryDisplay::default();
    }

    if value.eq_ignore_ascii_case(GLOBAL_LABEL) {
        return TerritoryDisplay::global();
    }

    let code = if value.chars().count() > 2 {
        if countries::is_known_name(value) {
            countries::code_of(value).to_uppercase()
        } else {
            // Unrecognized names are echoed as-is.
            value.to_string()
        }
    } else {
        value.to_ascii_uppercase()
    };

    let flag_code = if code == LEGACY_UK {
        UNITED_KINGDOM
    } else {
        code.as_str()
    };

    TerritoryDisplay {
        is_global: false,
        flag: countries::flag_of(flag_code),
        display_text: code.clone(),
        country_code: code,
    }
}

/// Resolve a list of tokens, skipping blanks.
pub fn resolve_all<S: AsRef<str>>(raw: &[S]) -> Vec<TerritoryDisplay> {
    raw.iter()
        .map(|t| resolve(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Value to send to the backend: `"Global"` or the resolved code.
pub fn filter_value(raw: &str) -> Option<String> {
    let resolved = resolve(raw);
    if resolved.is_global {
        Some(GLOBAL_LABEL.to_string())
    } else if resolved.country_code.is_empty() {
        None
    } else {
        Some(resolved.country_code)
    }
}
