//! Paginator configuration
//!
//! Page size and page selection as they arrive from outside the program:
//! a YAML or JSON file, or an inline string. Values stay signed until they
//! reach the paginator so that bad input is rejected there, with the same
//! error a direct caller would get.

use crate::adapter::Adapter;
use crate::error::{Error, Result};
use crate::paginator::{Paginator, DEFAULT_ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Paginator settings loaded from YAML or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Number of items per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,

    /// Page to select (1-based); the first page when absent
    #[serde(default)]
    pub page: Option<i64>,
}

fn default_items_per_page() -> i64 {
    DEFAULT_ITEMS_PER_PAGE as i64
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page: None,
        }
    }
}

impl PaginatorConfig {
    /// Create a config with the given page size
    pub fn new(items_per_page: i64) -> Self {
        Self {
            items_per_page,
            page: None,
        }
    }

    /// Set the page to select
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Apply these settings to a paginator
    ///
    /// Page size is applied first since it resets the current page.
    pub fn apply<A: Adapter>(&self, paginator: &mut Paginator<A>) -> Result<()> {
        paginator.set_items_per_page(self.items_per_page)?;
        if let Some(page) = self.page {
            paginator.set_current_page(page)?;
        }
        Ok(())
    }

    /// Build a paginator over `adapter` with these settings
    pub fn build<A: Adapter>(&self, adapter: A) -> Result<Paginator<A>> {
        let mut paginator = Paginator::new(adapter);
        self.apply(&mut paginator)?;
        Ok(paginator)
    }
}

/// Load paginator settings from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        load_config_from_str(&content)
    }
}

/// Parse paginator settings from a YAML string
///
/// JSON is a subset of YAML, so inline JSON works here too.
pub fn load_config_from_str(content: &str) -> Result<PaginatorConfig> {
    Ok(serde_yaml::from_str(content)?)
}
