// src/services/filters.rs

//! Turns filter-state snapshots into query parameters.
//!
//! A key is present only when its control holds a value: blank strings and
//! zero page numbers are omitted rather than sent empty.

use super::{countries, territory};
use crate::models::{FilterState, QueryParams, QueryValue};

/// Query keys understood by the list endpoints.
pub mod keys {
    pub const NAME: &str = "name";
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const TERRITORY: &str = "territory";
    pub const SECTOR: &str = "sector";
    pub const GROUP: &str = "group";
    pub const IS_PROMOTED: &str = "isPromoted";
    pub const IS_FEATURED: &str = "isFeatured";
    pub const SCHOLARSHIP: &str = "scholarship";
    pub const PAGE: &str = "page";
    pub const LIMIT: &str = "limit";
}

/// Build parameters for a paginated list request.
pub fn build_query(state: &FilterState) -> QueryParams {
    let mut params = build_export_query(state);
    insert_number(&mut params, keys::PAGE, state.page);
    insert_number(&mut params, keys::LIMIT, state.limit);
    params
}

/// Build parameters for an export request: same filters, no paging.
pub fn build_export_query(state: &FilterState) -> QueryParams {
    let mut params = QueryParams::new();

    insert_text(&mut params, keys::NAME, state.search.as_deref());
    if let Some(country) = non_blank(state.country.as_deref()) {
        params.insert(keys::COUNTRY, QueryValue::Text(countries::code_of(country)));
    }
    insert_text(&mut params, keys::STATE, state.state.as_deref());
    if let Some(value) = state.territory.as_deref().and_then(territory::filter_value) {
        params.insert(keys::TERRITORY, QueryValue::Text(value));
    }
    insert_text(&mut params, keys::SECTOR, state.sector.as_deref());
    insert_text(&mut params, keys::GROUP, state.group.as_deref());
    insert_flag(&mut params, keys::IS_PROMOTED, state.is_promoted);
    insert_flag(&mut params, keys::IS_FEATURED, state.is_featured);
    insert_flag(&mut params, keys::SCHOLARSHIP, state.scholarship);

    log::debug!("Built query with {} filter(s)", params.len());
    params
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn insert_text(params: &mut QueryParams, key: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        params.insert(key, QueryValue::Text(value.to_string()));
    }
}

fn insert_number(params: &mut QueryParams, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|v| *v > 0) {
        params.insert(key, QueryValue::Number(value));
    }
}

fn insert_flag(params: &mut QueryParams, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        params.insert(key, QueryValue::Flag(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institutions_list_scenario() {
        let state = FilterState::default()
            .with_country("United States")
            .with_territory("Global")
            .with_search(" MIT ");

        let params = build_query(&state);
        assert_eq!(params.len(), 3);
        assert_eq!(params.text(keys::COUNTRY), Some("US"));
        assert_eq!(params.text(keys::TERRITORY), Some("Global"));
        assert_eq!(params.text(keys::NAME), Some("MIT"));
    }

    #[test]
    fn test_blank_fields_omitted() {
        let state = FilterState {
            search: Some("   ".into()),
            country: Some(String::new()),
            state: Some("\t".into()),
            territory: Some(" ".into()),
            sector: None,
            group: Some(String::new()),
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        };
        assert!(build_query(&state).is_empty());
        assert!(build_query(&FilterState::default()).is_empty());
    }

    #[test]
    fn test_no_empty_values_ever_emitted() {
        let state = FilterState {
            search: Some(" a ".into()),
            country: Some("xx".into()),
            state: Some(" NSW ".into()),
            territory: Some("Narnia".into()),
            sector: Some("University".into()),
            group: Some(" ".into()),
            is_promoted: Some(false),
            is_featured: None,
            scholarship: Some(true),
            page: Some(2),
            limit: Some(25),
        };
        let params = build_query(&state);
        for key in params.keys() {
            let value = params.get(key).unwrap().to_string();
            assert!(!value.trim().is_empty(), "{key}");
        }
        assert!(!params.contains_key(keys::GROUP));
        assert!(!params.contains_key(keys::IS_FEATURED));
        assert_eq!(params.get(keys::IS_PROMOTED), Some(&QueryValue::Flag(false)));
        assert_eq!(params.text(keys::STATE), Some("NSW"));
        assert_eq!(params.text(keys::COUNTRY), Some("xx"));
        assert_eq!(params.text(keys::TERRITORY), Some("Narnia"));
    }

    #[test]
    fn test_territory_resolved_to_code() {
        let state = FilterState::default().with_territory("australia");
        assert_eq!(build_query(&state).text(keys::TERRITORY), Some("AU"));
    }

    #[test]
    fn test_paging_only_in_list_query() {
        let state = FilterState::default().with_search("Oxford").with_page(3, 50);

        let list = build_query(&state);
        assert_eq!(list.get(keys::PAGE), Some(&QueryValue::Number(3)));
        assert_eq!(list.get(keys::LIMIT), Some(&QueryValue::Number(50)));

        let export = build_export_query(&state);
        assert!(!export.contains_key(keys::PAGE));
        assert!(!export.contains_key(keys::LIMIT));
        assert_eq!(export.text(keys::NAME), Some("Oxford"));
    }

    #[test]
    fn test_query_string() {
        let state = FilterState::default()
            .with_country("New Zealand")
            .with_page(1, 10);
        assert_eq!(build_query(&state).to_query_string(), "country=NZ&limit=10&page=1");
    }
}
