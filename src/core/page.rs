//! Pagination and the result summary shown above/below a result list

use serde::Serialize;
use std::ops::Range;

/// Records per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages for `count` items; never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// A 1-based page over a list of `total_items`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PageWindow {
    /// Build a window, clamping `page` into `1..=total_pages`
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let page = page.clamp(1, total_pages(total_items, page_size));
        Self {
            page,
            page_size,
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Slice range into the full list
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// 1-based inclusive display bounds; `(0, 0)` for an empty list
    pub fn display_bounds(&self) -> (usize, usize) {
        let range = self.range();
        if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Read-only view of the current result set and page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_count: usize,
    pub page: usize,
    pub page_start: usize,
    pub page_end: usize,
    pub total_pages: usize,
    /// "ALL" or the filtered position code
    pub active_position_label: String,
}

impl ResultSummary {
    pub fn new(window: &PageWindow, active_position_label: impl Into<String>) -> Self {
        let (page_start, page_end) = window.display_bounds();
        Self {
            total_count: window.total_items,
            page: window.page,
            page_start,
            page_end,
            total_pages: window.total_pages(),
            active_position_label: active_position_label.into(),
        }
    }

    /// e.g. "Showing 12 records at QB position"
    pub fn count_line(&self) -> String {
        let noun = if self.total_count == 1 {
            "record"
        } else {
            "records"
        };
        if self.active_position_label == "ALL" {
            format!("Showing {} {}", self.total_count, noun)
        } else {
            format!(
                "Showing {} {} at {} position",
                self.total_count, noun, self.active_position_label
            )
        }
    }

    /// e.g. "Showing 6 to 10 of 12 players"
    pub fn range_line(&self) -> String {
        format!(
            "Showing {} to {} of {} players",
            self.page_start, self.page_end, self.total_count
        )
    }
}
