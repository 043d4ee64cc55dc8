// src/models/filter.rs

//! Filter state snapshots and the query objects built from them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the list-view filter controls.
///
/// Every field is independently optional. Strings hold whatever the user
/// typed or picked, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Free-text name search
    pub search: Option<String>,

    /// Country code or display name
    pub country: Option<String>,

    pub state: Option<String>,

    /// "Global", a country code, or a country name
    pub territory: Option<String>,

    /// Institution category (University, College, ...)
    pub sector: Option<String>,

    pub group: Option<String>,

    /// Tri-state dropdown: unset, promoted only, not promoted only
    pub is_promoted: Option<bool>,

    pub is_featured: Option<bool>,

    pub scholarship: Option<bool>,

    pub page: Option<u32>,

    pub limit: Option<u32>,
}

impl FilterState {
    pub fn with_search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }

    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn with_territory(mut self, value: impl Into<String>) -> Self {
        self.territory = Some(value.into());
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Flag(bool),
    Number(u32),
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Query parameters for a list or export request.
///
/// Keys are kept sorted so the rendered query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: QueryValue) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Text value for a key, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(QueryValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_encoding() {
        let mut params = QueryParams::new();
        params.insert("name", QueryValue::Text("Trinity & St John".into()));
        params.insert("page", QueryValue::Number(2));
        params.insert("isPromoted", QueryValue::Flag(true));

        assert_eq!(
            params.to_query_string(),
            "isPromoted=true&name=Trinity+%26+St+John&page=2"
        );
    }

    #[test]
    fn test_query_params_serialize_flat() {
        let mut params = QueryParams::new();
        params.insert("country", QueryValue::Text("US".into()));
        params.insert("limit", QueryValue::Number(25));

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"country":"US","limit":25}"#);
    }

    #[test]
    fn test_filter_state_from_camel_case_json() {
        let state: FilterState =
            serde_json::from_str(r#"{"search":"MIT","isPromoted":true,"limit":10}"#).unwrap();
        assert_eq!(state.search.as_deref(), Some("MIT"));
        assert_eq!(state.is_promoted, Some(true));
        assert_eq!(state.limit, Some(10));
        assert!(state.country.is_none());
    }
}
