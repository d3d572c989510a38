//! CLI runner - executes commands

use crate::adapter::ArrayAdapter;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PaginatorConfig};
use crate::error::{Error, Result};
use serde_json::{json, Value};
use std::fs;
use std::io::Read;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Page { page, summary_only } => self.page(*page, *summary_only),
            Commands::Pages => self.pages(),
        }
    }

    /// Load paginator settings, applying command-line overrides
    fn load_config(&self, page: Option<i64>) -> Result<PaginatorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => PaginatorConfig::default(),
        };

        if let Some(per_page) = self.cli.per_page {
            config.items_per_page = per_page;
            // A new page size invalidates a page picked for the old one
            config.page = None;
        }
        if page.is_some() {
            config.page = page;
        }

        debug!(?config, "Resolved paginator config");
        Ok(config)
    }

    /// Load the input JSON array
    fn load_items(&self) -> Result<Vec<Value>> {
        let content = match &self.cli.input {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::config(format!(
                    "Failed to read input file '{}': {}",
                    path.display(),
                    e
                ))
            })?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        match serde_json::from_str(&content)? {
            Value::Array(items) => {
                info!(count = items.len(), "Loaded input items");
                Ok(items)
            }
            other => Err(Error::config(format!(
                "Input must be a JSON array, got {}",
                type_name(&other)
            ))),
        }
    }

    fn page(&self, page: Option<i64>, summary_only: bool) -> Result<()> {
        let config = self.load_config(page)?;
        let paginator = config.build(ArrayAdapter::new(self.load_items()?))?;

        let mut msg = json!({
            "type": "PAGE",
            "summary": paginator.summary(),
        });
        if !summary_only {
            msg["items"] = Value::Array(paginator.items().to_vec());
        }

        self.output_message(&msg);
        Ok(())
    }

    fn pages(&self) -> Result<()> {
        let config = PaginatorConfig {
            page: None,
            ..self.load_config(None)?
        };
        let adapter = ArrayAdapter::new(self.load_items()?);
        let mut paginator = config.build(&adapter)?;

        for page in 1..=paginator.count_pages() {
            let page = i64::try_from(page)
                .map_err(|_| Error::invalid_argument(format!("Page {page} out of range")))?;
            paginator.set_current_page(page)?;

            self.output_message(&json!({
                "type": "PAGE_BOUNDS",
                "page": page,
                "first_item": paginator.first_item_on_page(),
                "last_item": paginator.last_item_on_page(),
            }));
        }

        Ok(())
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
