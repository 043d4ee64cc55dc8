// src/models/course.rs

//! Course records and their commission values.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Commission attached to a course or provider.
///
/// The backend sends this as a string, a bare number, `null`, or leaves it
/// out entirely. Everything is normalized here so callers only branch on
/// presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommissionValue {
    /// Commission text, e.g. `"15%"` or `"20% (first year); others 15%"`
    Percentage(String),
    #[default]
    Absent,
}

impl CommissionValue {
    /// Build from free text; blank text is `Absent`.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Absent
        } else {
            Self::Percentage(trimmed.to_string())
        }
    }

    /// Build from a bare number, rendered as a percentage.
    pub fn from_number(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Absent;
        }
        Self::Percentage(format!("{value}%"))
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Percentage(text) => Some(text),
            Self::Absent => None,
        }
    }
}

impl fmt::Display for CommissionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommission {
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for CommissionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawCommission>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawCommission::Text(text)) => Self::from_text(&text),
            Some(RawCommission::Number(value)) => Self::from_number(value),
            None => Self::Absent,
        })
    }
}

impl Serialize for CommissionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Percentage(text) => serializer.serialize_str(text),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// A stored course entry.
///
/// `course` may hold several newline-separated course lines, and may carry
/// the commission inline when `commission` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub course: String,

    #[serde(default)]
    pub commission: CommissionValue,
}

impl Course {
    pub fn new(course: impl Into<String>, commission: &str) -> Self {
        Self {
            course: course.into(),
            commission: CommissionValue::from_text(commission),
        }
    }
}

/// Course name and commission split out of one line of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCourse {
    pub course: String,
    pub commission: String,
}

/// One rendered row of the expandable course table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub course: String,
    pub commission: String,
    /// `"{record_index}-{line_index}"`
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_from_string() {
        let course: Course = serde_json::from_str(r#"{"course":"MBA","commission":" 10% "}"#).unwrap();
        assert_eq!(course.commission, CommissionValue::Percentage("10%".into()));
    }

    #[test]
    fn test_commission_from_number() {
        let course: Course = serde_json::from_str(r#"{"course":"MBA","commission":12.5}"#).unwrap();
        assert_eq!(course.commission.as_str(), Some("12.5%"));

        let course: Course = serde_json::from_str(r#"{"course":"MBA","commission":15}"#).unwrap();
        assert_eq!(course.commission.as_str(), Some("15%"));
    }

    #[test]
    fn test_commission_absent_variants() {
        for json in [
            r#"{"course":"MBA"}"#,
            r#"{"course":"MBA","commission":null}"#,
            r#"{"course":"MBA","commission":"   "}"#,
        ] {
            let course: Course = serde_json::from_str(json).unwrap();
            assert_eq!(course.commission, CommissionValue::Absent, "{json}");
        }
    }

    #[test]
    fn test_commission_serializes_as_string_or_null() {
        let course = Course::new("MBA", "10%");
        assert_eq!(
            serde_json::to_string(&course).unwrap(),
            r#"{"course":"MBA","commission":"10%"}"#
        );

        let course = Course::new("MBA", "");
        assert_eq!(
            serde_json::to_string(&course).unwrap(),
            r#"{"course":"MBA","commission":null}"#
        );
    }
}
