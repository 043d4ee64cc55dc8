// src/services/validation.rs

//! Guard checks run before UI actions.
//!
//! Guards report problems as a [`Validation`] value instead of an error so the
//! caller decides how to surface them.

use serde::Serialize;
use url::Url;

use super::course_parser;
use super::payload::InstitutionForm;
use crate::models::ImportConfig;

/// Longest free-text commission accepted without a percentage.
const MAX_COMMISSION_TEXT: usize = 200;

/// Result of a guard check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Keep the first failure.
    pub fn and_then(self, next: impl FnOnce() -> Validation) -> Validation {
        if self.is_valid { next() } else { self }
    }
}

/// Non-blank check for a named field.
pub fn validate_required(label: &str, value: &str) -> Validation {
    if value.trim().is_empty() {
        Validation::fail(format!("{label} is required"))
    } else {
        Validation::ok()
    }
}

pub fn validate_course_name(name: &str) -> Validation {
    validate_required("Course name", name)
}

/// Commission may be blank, a percentage, or a short description.
pub fn validate_commission(commission: &str) -> Validation {
    let commission = commission.trim();
    if commission.is_empty() {
        return Validation::ok();
    }
    let has_percentage = course_parser::parse(commission)
        .map(|p| !p.commission.is_empty())
        .unwrap_or(false);
    if has_percentage || commission.chars().count() <= MAX_COMMISSION_TEXT {
        Validation::ok()
    } else {
        Validation::fail(format!(
            "Commission must contain a percentage or be at most {MAX_COMMISSION_TEXT} characters"
        ))
    }
}

/// Website may be blank; otherwise it must be an http(s) URL.
pub fn validate_website(website: &str) -> Validation {
    let website = website.trim();
    if website.is_empty() {
        return Validation::ok();
    }
    match Url::parse(website) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {
            Validation::ok()
        }
        Ok(url) => Validation::fail(format!("Unsupported website scheme '{}'", url.scheme())),
        Err(e) => Validation::fail(format!("Invalid website URL: {e}")),
    }
}

/// Check an upload's extension and size before it is sent.
pub fn validate_import_file(file_name: &str, size_bytes: u64, config: &ImportConfig) -> Validation {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Validation::fail("Please select a file to import");
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if !config.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&extension)) {
        let allowed: Vec<String> = config
            .allowed_extensions
            .iter()
            .map(|a| format!(".{a}"))
            .collect();
        return Validation::fail(format!("File must be one of: {}", allowed.join(", ")));
    }

    if size_bytes == 0 {
        return Validation::fail("File is empty");
    }
    if size_bytes > config.max_file_size_bytes {
        return Validation::fail(format!(
            "File must be smaller than {}",
            human_size(config.max_file_size_bytes)
        ));
    }

    Validation::ok()
}

/// Check an institution form before it is cleaned and submitted.
pub fn validate_institution(form: &InstitutionForm) -> Validation {
    let base = validate_required("Institution name", &form.name)
        .and_then(|| validate_required("Country", &form.country))
        .and_then(|| validate_website(&form.website));
    if !base.is_valid {
        return base;
    }

    for (index, course) in form.courses.iter().enumerate() {
        let blank_course = course.course.trim().is_empty();
        let blank_commission = course.commission.trim().is_empty();
        if blank_course && blank_commission {
            continue;
        }
        let check = validate_course_name(&course.course)
            .and_then(|| validate_commission(&course.commission));
        if let Some(error) = check.error {
            return Validation::fail(format!("Course {}: {error}", index + 1));
        }
    }

    Validation::ok()
}

fn human_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}
