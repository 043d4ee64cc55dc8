// src/services/countries.rs

//! Country registry: ISO alpha-2 codes, display names, and flag glyphs.
//!
//! Lookups are case-insensitive and never fail. A miss echoes the input so
//! unfamiliar data still renders.

use serde::Serialize;

/// A registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

const fn c(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

/// Every country the dashboard filters and badges know about.
static COUNTRIES: &[Country] = &[
    c("AF", "Afghanistan"),
    c("AL", "Albania"),
    c("DZ", "Algeria"),
    c("AR", "Argentina"),
    c("AM", "Armenia"),
    c("AU", "Australia"),
    c("AT", "Austria"),
    c("AZ", "Azerbaijan"),
    c("BH", "Bahrain"),
    c("BD", "Bangladesh"),
    c("BY", "Belarus"),
    c("BE", "Belgium"),
    c("BT", "Bhutan"),
    c("BO", "Bolivia"),
    c("BA", "Bosnia and Herzegovina"),
    c("BW", "Botswana"),
    c("BR", "Brazil"),
    c("BN", "Brunei"),
    c("BG", "Bulgaria"),
    c("KH", "Cambodia"),
    c("CM", "Cameroon"),
    c("CA", "Canada"),
    c("CL", "Chile"),
    c("CN", "China"),
    c("CO", "Colombia"),
    c("CR", "Costa Rica"),
    c("HR", "Croatia"),
    c("CU", "Cuba"),
    c("CY", "Cyprus"),
    c("CZ", "Czech Republic"),
    c("DK", "Denmark"),
    c("DO", "Dominican Republic"),
    c("EC", "Ecuador"),
    c("EG", "Egypt"),
    c("SV", "El Salvador"),
    c("EE", "Estonia"),
    c("ET", "Ethiopia"),
    c("FJ", "Fiji"),
    c("FI", "Finland"),
    c("FR", "France"),
    c("GE", "Georgia"),
    c("DE", "Germany"),
    c("GH", "Ghana"),
    c("GR", "Greece"),
    c("GT", "Guatemala"),
    c("HN", "Honduras"),
    c("HK", "Hong Kong"),
    c("HU", "Hungary"),
    c("IS", "Iceland"),
    c("IN", "India"),
    c("ID", "Indonesia"),
    c("IR", "Iran"),
    c("IQ", "Iraq"),
    c("IE", "Ireland"),
    c("IL", "Israel"),
    c("IT", "Italy"),
    c("JM", "Jamaica"),
    c("JP", "Japan"),
    c("JO", "Jordan"),
    c("KZ", "Kazakhstan"),
    c("KE", "Kenya"),
    c("KW", "Kuwait"),
    c("KG", "Kyrgyzstan"),
    c("LA", "Laos"),
    c("LV", "Latvia"),
    c("LB", "Lebanon"),
    c("LY", "Libya"),
    c("LT", "Lithuania"),
    c("LU", "Luxembourg"),
    c("MO", "Macau"),
    c("MG", "Madagascar"),
    c("MW", "Malawi"),
    c("MY", "Malaysia"),
    c("MV", "Maldives"),
    c("MT", "Malta"),
    c("MU", "Mauritius"),
    c("MX", "Mexico"),
    c("MD", "Moldova"),
    c("MN", "Mongolia"),
    c("ME", "Montenegro"),
    c("MA", "Morocco"),
    c("MZ", "Mozambique"),
    c("MM", "Myanmar"),
    c("NA", "Namibia"),
    c("NP", "Nepal"),
    c("NL", "Netherlands"),
    c("NZ", "New Zealand"),
    c("NI", "Nicaragua"),
    c("NG", "Nigeria"),
    c("MK", "North Macedonia"),
    c("NO", "Norway"),
    c("OM", "Oman"),
    c("PK", "Pakistan"),
    c("PS", "Palestine"),
    c("PA", "Panama"),
    c("PG", "Papua New Guinea"),
    c("PY", "Paraguay"),
    c("PE", "Peru"),
    c("PH", "Philippines"),
    c("PL", "Poland"),
    c("PT", "Portugal"),
    c("QA", "Qatar"),
    c("RO", "Romania"),
    c("RU", "Russia"),
    c("RW", "Rwanda"),
    c("SA", "Saudi Arabia"),
    c("SN", "Senegal"),
    c("RS", "Serbia"),
    c("SG", "Singapore"),
    c("SK", "Slovakia"),
    c("SI", "Slovenia"),
    c("ZA", "South Africa"),
    c("KR", "South Korea"),
    c("ES", "Spain"),
    c("LK", "Sri Lanka"),
    c("SD", "Sudan"),
    c("SE", "Sweden"),
    c("CH", "Switzerland"),
    c("SY", "Syria"),
    c("TW", "Taiwan"),
    c("TJ", "Tajikistan"),
    c("TZ", "Tanzania"),
    c("TH", "Thailand"),
    c("TN", "Tunisia"),
    c("TR", "Turkey"),
    c("TM", "Turkmenistan"),
    c("UG", "Uganda"),
    c("UA", "Ukraine"),
    c("AE", "United Arab Emirates"),
    c("GB", "United Kingdom"),
    c("US", "United States"),
    c("UY", "Uruguay"),
    c("UZ", "Uzbekistan"),
    c("VE", "Venezuela"),
    c("VN", "Vietnam"),
    c("YE", "Yemen"),
];

/// Regional indicator symbol letter A (U+1F1E6).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// All registry entries in table order.
pub fn all() -> &'static [Country] {
    COUNTRIES
}

/// Entries sorted by display name, for dropdowns.
pub fn options() -> Vec<Country> {
    let mut options = COUNTRIES.to_vec();
    options.sort_by(|a, b| a.name.cmp(b.name));
    options
}

fn find_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

fn find_by_name(name: &str) -> Option<&'static Country> {
    let needle = name.to_lowercase();
    COUNTRIES.iter().find(|c| c.name.to_lowercase() == needle)
}

/// Whether `code` is in the registry (any case).
pub fn is_known_code(code: &str) -> bool {
    find_by_code(code).is_some()
}

/// Whether `name` is a registry display name (any case).
pub fn is_known_name(name: &str) -> bool {
    find_by_name(name).is_some()
}

/// Display name for a code, or the input unchanged.
///
/// ```
/// use dashboard_core::services::countries::name_of;
///
/// assert_eq!(name_of("us"), "United States");
/// assert_eq!(name_of("XX"), "XX");
/// ```
pub fn name_of(code: &str) -> String {
    match find_by_code(code) {
        Some(country) => country.name.to_string(),
        None => code.to_string(),
    }
}

/// Code for a display name, or the input unchanged.
pub fn code_of(name: &str) -> String {
    match find_by_name(name) {
        Some(country) => country.code.to_string(),
        None => {
            log::debug!("No country code for '{}'", name);
            name.to_string()
        }
    }
}

/// Flag glyph for a two-letter code, or `""`.
pub fn flag_of(code: &str) -> String {
    let mut chars = code.chars();
    let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
        return String::new();
    };

    [first, second]
        .iter()
        .map(|ch| ch.to_ascii_uppercase())
        .map(|ch| {
            if ch.is_ascii_uppercase() {
                char::from_u32(REGIONAL_INDICATOR_A + (ch as u32 - 'A' as u32))
            } else {
                None
            }
        })
        .collect::<Option<String>>()
        .unwrap_or_default()
}
