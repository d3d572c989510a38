//! Paginator types
//!
//! Resolution results and the serializable page snapshot.

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Result of resolving the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// The source holds no items, so no page exists
    Empty,
    /// Positioned at this 1-based page
    Page(usize),
}

impl PageState {
    /// Get the page number, if any
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Empty => None,
        }
    }

    /// Check if this is the empty state
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Snapshot of every boundary value for the current page
///
/// Meant for whatever renders "page N of M" links; all numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSummary {
    /// Configured items per page
    pub items_per_page: usize,
    /// Total items in the source
    pub total_items: usize,
    /// Total pages
    pub total_pages: usize,
    pub current_page: Option<usize>,
    pub first_page: Option<usize>,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub last_page: Option<usize>,
    /// Number of the first item on the current page
    pub first_item: Option<usize>,
    /// Number of the last item on the current page
    pub last_item: Option<usize>,
}

impl PageSummary {
    /// Check if there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if there is a page before the current one
    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }
}
