//! Error types for pagekit
//!
//! Paginator misuse surfaces as a single invalid-argument kind. The remaining
//! variants belong to the config loader and the CLI.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Paginator Errors
    // ============================================================================
    #[error("{message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_items_per_page(items: i64) -> Self {
        Self::invalid_argument(format!("Invalid number of items per page: {items}."))
    }

    pub(crate) fn empty_paginator(page: i64) -> Self {
        Self::invalid_argument(format!(
            "Invalid page number: {page}; paginator is empty."
        ))
    }

    pub(crate) fn page_out_of_range(page: i64, pages: usize) -> Self {
        Self::invalid_argument(format!(
            "Invalid page number: {page}; it must be between 1 and {pages}."
        ))
    }

    /// Check if this error reports a caller passing a bad value
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
