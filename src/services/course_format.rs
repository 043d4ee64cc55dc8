// src/services/course_format.rs

//! Expands stored course records into one display row per course line.

use std::sync::LazyLock;

use regex::Regex;

use super::course_parser;
use crate::models::{CommissionValue, Course, DisplayRow};

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("valid line break pattern"));

/// Placeholder shown when a course line has no commission.
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

/// Formatter for the expandable course/commission table.
#[derive(Debug, Clone)]
pub struct CourseFormatter {
    placeholder: String,
}

impl CourseFormatter {
    /// Create a formatter using the default "N/A" placeholder.
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Create a formatter with a custom missing-commission placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Expand records into display rows.
    ///
    /// A record with a stored commission is shown as a single row. Otherwise
    /// its text is split into lines and each line is parsed on its own.
    pub fn format(&self, courses: &[Course]) -> Vec<DisplayRow> {
        courses
            .iter()
            .enumerate()
            .flat_map(|(index, course)| self.format_record(index, course))
            .collect()
    }

    fn format_record(&self, index: usize, course: &Course) -> Vec<DisplayRow> {
        if let CommissionValue::Percentage(commission) = &course.commission {
            let name = course.course.trim().trim_end_matches('(').trim_end();
            return vec![DisplayRow {
                course: name.to_string(),
                commission: commission.clone(),
                key: row_key(index, 0),
            }];
        }

        LINE_BREAKS
            .split(&course.course)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(course_parser::parse)
            .enumerate()
            .map(|(line, parsed)| DisplayRow {
                course: parsed.course,
                commission: if parsed.commission.is_empty() {
                    self.placeholder.clone()
                } else {
                    parsed.commission
                },
                key: row_key(index, line),
            })
            .collect()
    }
}

impl Default for CourseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn row_key(record: usize, line: usize) -> String {
    format!("{record}-{line}")
}

/// Convenience function using the default placeholder.
pub fn format_courses(courses: &[Course]) -> Vec<DisplayRow> {
    CourseFormatter::new().format(courses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(course: &str, commission: &str, key: &str) -> DisplayRow {
        DisplayRow {
            course: course.into(),
            commission: commission.into(),
            key: key.into(),
        }
    }

    #[test]
    fn test_line_splitting() {
        let rows = format_courses(&[Course::new("Line A 10%\nLine B 5%", "")]);
        assert_eq!(
            rows,
            vec![row("Line A", "10%", "0-0"), row("Line B", "5%", "0-1")]
        );
    }

    #[test]
    fn test_stored_commission_kept_verbatim() {
        let rows = format_courses(&[Course::new("MBA 10%\nMSc 5% (", "12%")]);
        assert_eq!(rows, vec![row("MBA 10%\nMSc 5%", "12%", "0-0")]);
    }

    #[test]
    fn test_missing_commission_uses_placeholder() {
        let rows = format_courses(&[Course::new("Short Courses", "")]);
        assert_eq!(rows, vec![row("Short Courses", "N/A", "0-0")]);
    }

    #[test]
    fn test_custom_placeholder() {
        let formatter = CourseFormatter::with_placeholder("-");
        let rows = formatter.format(&[Course::new("Short Courses", "")]);
        assert_eq!(rows[0].commission, "-");
    }

    #[test]
    fn test_blank_lines_skipped_and_keys_per_record() {
        let courses = vec![
            Course::new("Diploma 8%", ""),
            Course::new("\n\nBachelor 10%\r\n\r\n  \nMaster 12%\n", ""),
        ];
        let rows = format_courses(&courses);
        assert_eq!(
            rows,
            vec![
                row("Diploma", "8%", "0-0"),
                row("Bachelor", "10%", "1-0"),
                row("Master", "12%", "1-1"),
            ]
        );
    }

    #[test]
    fn test_empty_record_yields_no_rows() {
        assert!(format_courses(&[Course::new("  ", "")]).is_empty());
        assert!(format_courses(&[]).is_empty());
    }
}
