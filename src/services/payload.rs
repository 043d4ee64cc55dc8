// src/services/payload.rs

//! Cleans form input into create/update payloads for the backend.

use serde::{Deserialize, Serialize};

use super::{countries, territory};
use crate::models::{CommissionValue, Course, ProviderKind};

/// One course row as typed into the institution form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseForm {
    pub course: String,
    pub commission: String,
}

/// Raw institution form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionForm {
    pub name: String,
    /// Code or display name
    pub country: String,
    pub state: Vec<String>,
    pub territory: Vec<String>,
    pub sector: String,
    pub group: String,
    pub website: String,
    pub courses: Vec<CourseForm>,
    pub is_promoted: bool,
    pub is_featured: bool,
    pub scholarship: bool,
}

/// Institution body sent on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionPayload {
    pub name: String,
    pub country: String,
    pub state: Vec<String>,
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

/// Raw provider form input (insurance, visa, accommodation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderForm {
    pub name: String,
    pub kind: ProviderKind,
    pub territory: Vec<String>,
    pub commission: String,
    pub website: String,
}

/// Provider body sent on create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPayload {
    pub name: String,
    pub kind: ProviderKind,
    pub territory: Vec<String>,
    pub commission: CommissionValue,
    pub website: String,
}

impl From<&InstitutionForm> for InstitutionPayload {
    fn from(form: &InstitutionForm) -> Self {
        let country = form.country.trim();
        Self {
            name: form.name.trim().to_string(),
            country: if country.is_empty() {
                String::new()
            } else {
                countries::code_of(country)
            },
            state: clean_list(&form.state),
            territory: clean_territories(&form.territory),
            sector: form.sector.trim().to_string(),
            group: form.group.trim().to_string(),
            website: form.website.trim().to_string(),
            courses: form.courses.iter().filter_map(clean_course).collect(),
            is_promoted: form.is_promoted,
            is_featured: form.is_featured,
            scholarship: form.scholarship,
        }
    }
}

impl From<&ProviderForm> for ProviderPayload {
    fn from(form: &ProviderForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            kind: form.kind,
            territory: clean_territories(&form.territory),
            commission: CommissionValue::from_text(&form.commission),
            website: form.website.trim().to_string(),
        }
    }
}

/// Clean an institution form.
pub fn clean_institution(form: &InstitutionForm) -> InstitutionPayload {
    InstitutionPayload::from(form)
}

/// Clean a provider form.
pub fn clean_provider(form: &ProviderForm) -> ProviderPayload {
    ProviderPayload::from(form)
}

fn clean_list(values: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if !cleaned.iter().any(|c| c == value) {
            cleaned.push(value.to_string());
        }
    }
    cleaned
}

/// Territories as "Global" or codes, deduplicated in input order.
fn clean_territories(values: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values.iter().filter_map(|v| territory::filter_value(v)) {
        if !cleaned.contains(&value) {
            cleaned.push(value);
        }
    }
    cleaned
}

fn clean_course(form: &CourseForm) -> Option<Course> {
    let lines: Vec<&str> = form
        .course
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let commission = CommissionValue::from_text(&form.commission);
    if lines.is_empty() && !commission.is_present() {
        return None;
    }
    Some(Course {
        course: lines.join("\n"),
        commission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> InstitutionForm {
        InstitutionForm {
            name: "  University of Auckland ".into(),
            country: "new zealand".into(),
            state: vec![" Auckland ".into(), "".into(), "Auckland".into()],
            territory: vec!["global".into(), "India".into(), "IN".into(), " ".into()],
            sector: " University ".into(),
            group: String::new(),
            website: " https://www.auckland.ac.nz ".into(),
            courses: vec![
                CourseForm {
                    course: " BCom 10%\n\n  BSc 8% ".into(),
                    commission: "".into(),
                },
                CourseForm {
                    course: "MBA".into(),
                    commission: " 12% ".into(),
                },
                CourseForm::default(),
            ],
            is_promoted: true,
            is_featured: false,
            scholarship: true,
        }
    }

    #[test]
    fn test_clean_institution() {
        let payload = clean_institution(&sample_form());
        assert_eq!(payload.name, "University of Auckland");
        assert_eq!(payload.country, "NZ");
        assert_eq!(payload.state, vec!["Auckland".to_string()]);
        assert_eq!(payload.territory, vec!["Global".to_string(), "IN".to_string()]);
        assert_eq!(payload.sector, "University");
        assert_eq!(payload.website, "https://www.auckland.ac.nz");
        assert_eq!(payload.courses.len(), 2);
        assert_eq!(payload.courses[0].course, "BCom 10%\nBSc 8%");
        assert_eq!(payload.courses[0].commission, CommissionValue::Absent);
        assert_eq!(payload.courses[1].commission.as_str(), Some("12%"));
    }

    #[test]
    fn test_unknown_country_echoed() {
        let form = InstitutionForm {
            country: " Atlantis ".into(),
            ..Default::default()
        };
        assert_eq!(clean_institution(&form).country, "Atlantis");
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = clean_institution(&sample_form());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["country"], "NZ");
        assert_eq!(json["isPromoted"], true);
        assert_eq!(json["course"][1]["commission"], "12%");
        assert!(json["course"][0]["commission"].is_null());
    }

    #[test]
    fn test_clean_provider() {
        let form = ProviderForm {
            name: " Allianz Care ".into(),
            kind: ProviderKind::Insurance,
            territory: vec!["United Kingdom".into(), "uk".into()],
            commission: "  ".into(),
            website: String::new(),
        };
        let payload = clean_provider(&form);
        assert_eq!(payload.name, "Allianz Care");
        assert_eq!(payload.territory, vec!["GB".to_string(), "UK".to_string()]);
        assert_eq!(payload.commission, CommissionValue::Absent);
    }
}
