// src/services/course_parser.rs

//! Splits a free-text course line into course name and commission.
//!
//! Course data was entered by hand with the commission appended wherever it
//! fit, so this is a heuristic:
//!
//! 1. Find every `N%` / `N.N%` token.
//! 2. No token: the whole line is the course name.
//! 3. Split at the last token.
//! 4. With several tokens, split at the first one instead when the text after
//!    it contains `;` or "others" (e.g. `"20% (Brunei only); others 15%"`).
//! 5. Strip trailing `,` / `;` from the course name.
//!
//! Three-tier clauses without `;` or "others" split at the last token.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedCourse;

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?%").expect("valid percentage pattern"));

/// Marker word for a trailing "others N%" tier.
const OTHERS: &str = "others";

/// Parse one course line. Returns `None` only for blank input.
pub fn parse(text: &str) -> Option<ParsedCourse> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let matches: Vec<_> = PERCENTAGE.find_iter(text).collect();
    let Some(last) = matches.last() else {
        return Some(ParsedCourse {
            course: clean_course_name(text),
            commission: String::new(),
        });
    };

    let mut split_at = last.start();

    if matches.len() > 1 {
        let first = &matches[0];
        let after_first = &text[first.end()..];
        if after_first.contains(';') || after_first.to_lowercase().contains(OTHERS) {
            log::debug!("Multi-tier commission in '{}'", text);
            split_at = first.start();
        }
    }

    Some(ParsedCourse {
        course: clean_course_name(&text[..split_at]),
        commission: text[split_at..].trim().to_string(),
    })
}

fn clean_course_name(name: &str) -> String {
    name.trim()
        .trim_end_matches([',', ';'])
        .trim()
        .to_string()
}
