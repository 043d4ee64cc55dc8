// src/services/pagination.rs

//! Page-number window and ellipsis placement for list footers.

use serde::Serialize;

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_DELTA: u32 = 2;

/// Page numbers within `delta` of `current`, clamped to `[1, total]`.
pub fn page_range(current: u32, total: u32, delta: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(delta).max(1);
    let end = current.saturating_add(delta).min(total);
    (start..=end).collect()
}

/// Whether a "…" belongs between page 1 and the window.
pub fn show_leading_ellipsis(current: u32, delta: u32) -> bool {
    i64::from(current) > i64::from(delta) + 1
}

/// Whether a "…" belongs between the window and the last page.
pub fn show_trailing_ellipsis(current: u32, total: u32, delta: u32) -> bool {
    i64::from(current) < i64::from(total) - i64::from(delta)
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Everything a pagination footer needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub current: u32,
    pub total: u32,
    pub pages: Vec<u32>,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pager {
    /// Build a pager, clamping `current` into `[1, total]`.
    pub fn new(current: u32, total: u32, delta: u32) -> Self {
        let current = current.clamp(1, total.max(1));
        Self {
            current,
            total,
            pages: page_range(current, total, delta),
            leading_ellipsis: show_leading_ellipsis(current, delta),
            trailing_ellipsis: show_trailing_ellipsis(current, total, delta),
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    /// Build a pager from an item count and page size.
    pub fn for_items(current: u32, count: u64, page_size: u32, delta: u32) -> Self {
        Self::new(current, total_pages(count, page_size), delta)
    }
}
