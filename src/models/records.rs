// src/models/records.rs

//! Records as they arrive from the backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{CommissionValue, Course};

/// An educational institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Institution {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// Country code as stored (normally ISO alpha-2)
    pub country: String,

    /// Sent either as one string or as a list
    #[serde(deserialize_with = "string_or_list")]
    pub state: Vec<String>,

    /// Each entry is "Global", a country code, or a country name
    pub territory: Vec<String>,

    pub sector: String,

    pub group: String,

    pub website: String,

    #[serde(rename = "course")]
    pub courses: Vec<Course>,

    pub is_promoted: bool,

    pub is_featured: bool,

    pub scholarship: bool,
}

/// The kinds of service provider managed alongside institutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Insurance,
    Visa,
    Accommodation,
}

impl ProviderKind {
    /// Plural label used in export file names.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Insurance => "insurance_providers",
            Self::Visa => "visa_services",
            Self::Accommodation => "accommodations",
        }
    }
}

/// A health insurance, visa, or accommodation provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Provider {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub kind: ProviderKind,

    pub territory: Vec<String>,

    pub commission: CommissionValue,

    pub website: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Accept `"NSW"`, `["NSW", "VIC"]`, or `null`; blank entries are dropped.
fn string_or_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<StringOrList>::deserialize(deserializer)?;
    let values = match raw {
        Some(StringOrList::One(value)) => vec![value],
        Some(StringOrList::Many(values)) => values,
        None => Vec::new(),
    };
    Ok(values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_state_as_string() {
        let inst: Institution =
            serde_json::from_str(r#"{"name":"MIT","country":"US","state":"Massachusetts"}"#).unwrap();
        assert_eq!(inst.state, vec!["Massachusetts".to_string()]);
        assert!(inst.courses.is_empty());
    }

    #[test]
    fn test_institution_state_as_list() {
        let inst: Institution = serde_json::from_str(
            r#"{"_id":"abc","name":"Monash","state":["Victoria"," ","NSW"],"territory":["Global"]}"#,
        )
        .unwrap();
        assert_eq!(inst.id.as_deref(), Some("abc"));
        assert_eq!(inst.state, vec!["Victoria".to_string(), "NSW".to_string()]);
        assert_eq!(inst.territory, vec!["Global".to_string()]);
    }

    #[test]
    fn test_institution_courses_field() {
        let inst: Institution = serde_json::from_str(
            r#"{"name":"UCL","course":[{"course":"MSc 10%","commission":""},{"course":"BA","commission":12}]}"#,
        )
        .unwrap();
        assert_eq!(inst.courses.len(), 2);
        assert_eq!(inst.courses[0].commission, CommissionValue::Absent);
        assert_eq!(inst.courses[1].commission.as_str(), Some("12%"));
    }

    #[test]
    fn test_provider_kind() {
        let provider: Provider =
            serde_json::from_str(r#"{"name":"OSHC","kind":"insurance","commission":"10%"}"#).unwrap();
        assert_eq!(provider.kind, ProviderKind::Insurance);
        assert_eq!(provider.kind.entity_name(), "insurance_providers");
    }
}
