//! CLI module
//!
//! Command-line interface for paginating a JSON array.
//!
//! # Commands
//!
//! - `page` - Show the summary and items of one page
//! - `pages` - List every page with its item boundaries

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
