//! Paginator module
//!
//! Page and item boundary arithmetic over an [`Adapter`](crate::adapter::Adapter).
//!
//! # Overview
//!
//! A [`Paginator`] wraps one adapter for its whole life. It keeps two pieces
//! of configuration (items per page and the selected page) and derives
//! everything else on demand: page count, neighbouring pages, and the 1-based
//! numbers of the first and last item on the current page. The items of the
//! current page are fetched lazily, once per configuration, and dropped as
//! soon as either setting changes.
//!
//! All page and item numbers are 1-based. Only the offset handed to
//! [`Adapter::slice`](crate::adapter::Adapter::slice) is 0-based.

mod engine;
mod types;

pub use engine::Paginator;
pub use types::{PageState, PageSummary, DEFAULT_ITEMS_PER_PAGE};
