//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate a JSON array from a file or stdin
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file holding a JSON array (reads stdin when omitted)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Paginator config file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Items per page (overrides the config file)
    #[arg(short = 'n', long, global = true, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the summary and items of one page
    Page {
        /// Page to show (1-based, overrides the config file)
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Leave the items out and print only the summary
        #[arg(long)]
        summary_only: bool,
    },

    /// List every page with its first and last item numbers
    Pages,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Indented JSON output
    Pretty,
}
