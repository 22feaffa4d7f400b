//! Schema command: JSON schema of the dialog settings file

use anyhow::{Context, Result};
use clap::Args;
use modal_dialogs::DialogSettings;
use schemars::schema_for;
use std::path::PathBuf;
use tracing::info;

/// Generate the JSON schema for dialogs.json
#[derive(Debug, Args)]
pub struct SchemaCommand {
    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SchemaCommand {
    pub async fn execute(&self) -> Result<()> {
        let schema = schema_for!(DialogSettings);
        let text = serde_json::to_string_pretty(&schema)?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, text)
                    .await
                    .with_context(|| format!("Failed to write schema to {}", path.display()))?;
                info!("Schema written to {}", path.display());
            }
            None => println!("{}", text),
        }

        Ok(())
    }
}
