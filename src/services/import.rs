// src/services/import.rs

//! Spreadsheet import summaries and export/template rows.
//!
//! The spreadsheet encoding itself happens elsewhere; this module only shapes
//! the rows handed to it and the summary handed back.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::countries;
use crate::models::{ImportSummary, Institution};

/// Spreadsheet columns, in order.
pub const INSTITUTION_COLUMNS: &[&str] = &[
    "Name",
    "Country",
    "State",
    "Territory",
    "Sector",
    "Group",
    "Website",
    "Courses",
    "Promoted",
    "Featured",
    "Scholarship",
];

/// A flat spreadsheet row keyed by column header.
pub type SheetRow = BTreeMap<String, String>;

/// Label/value pairs for the post-import summary panel.
pub fn summary_items(summary: &ImportSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Total rows", summary.total_rows.to_string()),
        ("Created", summary.created.to_string()),
        ("Updated", summary.updated.to_string()),
        ("Skipped", summary.skipped.to_string()),
        ("Errors", summary.errors.to_string()),
    ]
}

/// One line per failed row, e.g. `"Row 4: Name is required"`.
pub fn error_lines(summary: &ImportSummary) -> Vec<String> {
    let mut details: Vec<_> = summary.error_details.iter().collect();
    details.sort_by_key(|d| d.row);
    details
        .into_iter()
        .map(|d| format!("Row {}: {}", d.row, d.error))
        .collect()
}

/// One-sentence outcome for a toast.
pub fn headline(summary: &ImportSummary) -> String {
    if !summary.is_consistent() {
        log::warn!(
            "Import counts exceed total rows: {} processed of {}",
            summary.processed(),
            summary.total_rows
        );
    }
    if summary.has_errors() {
        format!(
            "Imported {} of {} rows with {} error(s)",
            summary.succeeded(),
            summary.total_rows,
            summary.errors.max(summary.error_details.len() as u32)
        )
    } else {
        format!(
            "Imported {} of {} rows successfully",
            summary.succeeded(),
            summary.total_rows
        )
    }
}

/// Sample rows for the downloadable import template.
pub fn institution_template() -> Vec<Map<String, Value>> {
    let samples: [[&str; 11]; 2] = [
        [
            "University of Melbourne",
            "AU",
            "Victoria",
            "Global",
            "University",
            "Group of Eight",
            "https://www.unimelb.edu.au",
            "Bachelor of Commerce 15%\nMaster of IT 12%",
            "true",
            "false",
            "true",
        ],
        [
            "Seneca Polytechnic",
            "CA",
            "Ontario",
            "IN, NP",
            "College",
            "",
            "https://www.senecapolytechnic.ca",
            "Diploma in Business 10%",
            "false",
            "false",
            "false",
        ],
    ];

    samples
        .iter()
        .map(|values| {
            INSTITUTION_COLUMNS
                .iter()
                .zip(values.iter())
                .map(|(column, value)| (column.to_string(), Value::String(value.to_string())))
                .collect()
        })
        .collect()
}

/// Flatten institutions into spreadsheet rows.
pub fn export_rows(institutions: &[Institution]) -> Vec<SheetRow> {
    institutions.iter().map(export_row).collect()
}

fn export_row(institution: &Institution) -> SheetRow {
    let courses: Vec<String> = institution
        .courses
        .iter()
        .map(|c| match c.commission.as_str() {
            Some(commission) => format!("{} - {}", c.course.trim(), commission),
            None => c.course.trim().to_string(),
        })
        .filter(|line| !line.is_empty())
        .collect();

    let values = [
        institution.name.trim().to_string(),
        countries::name_of(institution.country.trim()),
        institution.state.join(", "),
        institution.territory.join(", "),
        institution.sector.clone(),
        institution.group.clone(),
        institution.website.clone(),
        courses.join("\n"),
        yes_no(institution.is_promoted),
        yes_no(institution.is_featured),
        yes_no(institution.scholarship),
    ];

    INSTITUTION_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .zip(values)
        .collect()
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

/// File name for a dated export, e.g. `export_institutions_2026-10-19.xlsx`.
pub fn export_file_name(prefix: &str, entity: &str, date: NaiveDate) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        format!("{}_{}.xlsx", entity, date.format("%Y-%m-%d"))
    } else {
        format!("{}_{}_{}.xlsx", prefix, entity, date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, RowError};

    fn summary() -> ImportSummary {
        ImportSummary {
            total_rows: 5,
            created: 2,
            updated: 1,
            skipped: 0,
            errors: 2,
            error_details: vec![
                RowError {
                    row: 7,
                    error: "Unknown country".into(),
                    data: Value::Null,
                },
                RowError {
                    row: 3,
                    error: "Name is required".into(),
                    data: Value::Null,
                },
            ],
        }
    }

    #[test]
    fn test_summary_items() {
        let items = summary_items(&summary());
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], ("Total rows", "5".to_string()));
        assert_eq!(items[4], ("Errors", "2".to_string()));
    }

    #[test]
    fn test_error_lines_sorted_by_row() {
        assert_eq!(
            error_lines(&summary()),
            vec![
                "Row 3: Name is required".to_string(),
                "Row 7: Unknown country".to_string()
            ]
        );
    }

    #[test]
    fn test_headline() {
        assert_eq!(headline(&summary()), "Imported 3 of 5 rows with 2 error(s)");

        let clean = ImportSummary {
            total_rows: 4,
            created: 4,
            ..Default::default()
        };
        assert_eq!(headline(&clean), "Imported 4 of 4 rows successfully");
    }

    #[test]
    fn test_template_columns() {
        let template = institution_template();
        assert_eq!(template.len(), 2);
        for row in &template {
            assert_eq!(row.len(), INSTITUTION_COLUMNS.len());
        }
        assert_eq!(template[0]["Country"], "AU");
    }

    #[test]
    fn test_export_rows() {
        let institution = Institution {
            name: "Imperial College London".into(),
            country: "gb".into(),
            state: vec!["London".into()],
            territory: vec!["Global".into(), "IN".into()],
            courses: vec![Course::new("MEng", "10%"), Course::new("MSc 8%", "")],
            is_promoted: true,
            ..Default::default()
        };
        let rows = export_rows(&[institution]);
        let row = &rows[0];
        assert_eq!(row["Country"], "United Kingdom");
        assert_eq!(row["Territory"], "Global, IN");
        assert_eq!(row["Courses"], "MEng - 10%\nMSc 8%");
        assert_eq!(row["Promoted"], "Yes");
        assert_eq!(row["Scholarship"], "No");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            export_file_name("export", "institutions", date),
            "export_institutions_2026-10-19.xlsx"
        );
        assert_eq!(
            export_file_name(" ", "visa_services", date),
            "visa_services_2026-10-19.xlsx"
        );
    }
}
