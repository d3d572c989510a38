//! # pagekit
//!
//! Page-count arithmetic and lazy page slices over any countable, sliceable
//! data source.
//!
//! ## Features
//!
//! - **Adapter trait**: count + offset slice, implemented for in-memory vectors
//!   and closure-backed sources, usable by reference or as a trait object
//! - **Paginator**: page count, current/first/previous/next/last page, first and
//!   last item on the page, all 1-based
//! - **Lazy page items**: fetched once per configuration, dropped when the page
//!   size or the current page changes
//! - **Config**: page settings from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{ArrayAdapter, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let adapter: ArrayAdapter<u32> = (1..=200).collect();
//!     let mut paginator = Paginator::new(&adapter);
//!     paginator.set_items_per_page(50)?.set_current_page(2)?;
//!
//!     assert_eq!(paginator.count_pages(), 4);
//!     assert_eq!(paginator.previous_page(), Some(1));
//!     assert_eq!(paginator.next_page(), Some(3));
//!     assert_eq!(paginator.items().first(), Some(&51));
//!     assert_eq!(paginator.items().last(), Some(&100));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                   Paginator                   │
//! │  items_per_page   current_page   page items   │
//! └───────────────────────┬───────────────────────┘
//!                         │ count() / slice(limit, offset)
//! ┌───────────────────────┴───────────────────────┐
//! │                    Adapter                    │
//! ├───────────────┬───────────────┬───────────────┤
//! │ ArrayAdapter  │CallbackAdapter│  your source  │
//! └───────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Data source adapters
pub mod adapter;

/// Page and item boundary arithmetic
pub mod paginator;

/// Paginator settings from YAML or JSON
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use adapter::{Adapter, ArrayAdapter, CallbackAdapter};
pub use config::{load_config, load_config_from_str, PaginatorConfig};
pub use error::{Error, Result};
pub use paginator::{PageState, PageSummary, Paginator, DEFAULT_ITEMS_PER_PAGE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
