use anyhow::Result;
use clap::{Parser, Subcommand};
use modal_dialogs::{
    dialogs::{buttons_for, styles, ButtonId},
    DialogKind, DialogSettings,
};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{SchemaCommand, ShowCommand};

/// Dialogs - mount modal dialogs into an in-memory document and answer them
#[derive(Parser)]
#[command(
    name = "dialogs",
    version,
    about = "Mount modal dialogs into an in-memory document and answer them",
    long_about = r#"Opens a dialog the way an application would, prints the mounted markup,
simulates the user's response and prints the outcome as JSON.

Examples:
  dialogs show info --title Welcome --content "Hello, Jane Doe!"
  dialogs show confirm --title "Delete?" --confirm-text Delete --respond cancel
  dialogs show prompt --label Name --value Jane --respond type:John
  dialogs kinds"#
)]
pub struct Cli {
    /// Current working directory
    #[arg(short = 'c', long = "cwd", global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a dialog and answer it
    Show(ShowCommand),
    /// List dialog kinds and their buttons
    Kinds,
    /// Print the JSON schema of dialogs.json
    Schema(SchemaCommand),
    /// Print the built-in dialog stylesheet
    Styles,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        // Change working directory if specified
        if let Some(cwd) = &self.cwd {
            std::env::set_current_dir(cwd).map_err(|e| {
                anyhow::anyhow!("Failed to change directory to {}: {}", cwd.display(), e)
            })?;
            info!("Changed working directory to: {}", cwd.display());
        }

        let settings = DialogSettings::init().await?;
        debug!("Dialog settings initialized");

        match self.command {
            Commands::Show(show) => show.execute(&settings).await,
            Commands::Kinds => {
                print_kinds(&settings);
                Ok(())
            }
            Commands::Schema(schema) => schema.execute().await,
            Commands::Styles => {
                println!("{}", styles::dialog_styles());
                Ok(())
            }
        }
    }
}

fn print_kinds(settings: &DialogSettings) {
    for kind in DialogKind::ALL {
        let buttons: Vec<String> = buttons_for(kind, settings)
            .iter()
            .map(|button| {
                let role = match button.id {
                    ButtonId::Confirm => "confirm",
                    ButtonId::Decline => "decline",
                    ButtonId::Cancel => "cancel",
                };
                format!("{} \"{}\" ({})", role, button.text, button.button_type.as_str())
            })
            .collect();

        let extra = if kind == DialogKind::Prompt { " + text input" } else { "" };
        println!("{:<8} {}{}", kind.as_str(), buttons.join(", "), extra);
    }
}
