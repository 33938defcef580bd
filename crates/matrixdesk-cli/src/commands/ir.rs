//! Instructional ruleset blueprint commands.

use chrono::Utc;
use clap::Subcommand;
use matrixdesk_core::ir::IR_EXPORT_FILE;
use matrixdesk_core::storage::{load_ir, save_ir};
use matrixdesk_core::{IrBlueprint, SqliteStore};
use std::path::PathBuf;

use super::{read_input, write_output};

#[derive(Subcommand)]
pub enum IrAction {
    /// Save raw rules (and optionally their markdown rendering)
    Save {
        /// Read raw rules from a UTF-8 file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Inline raw rules
        #[arg(long)]
        text: Option<String>,
        /// Markdown rendering; the raw text is used when omitted
        #[arg(long)]
        markdown_file: Option<PathBuf>,
    },
    /// Show the saved blueprint as JSON
    Show,
    /// Write the markdown body to a file (default ir.md) or stdout
    Export {
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

pub fn run(action: IrAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;

    match action {
        IrAction::Save {
            file,
            text,
            markdown_file,
        } => {
            let (raw, _) = read_input(file.as_deref(), text)?;
            let ir = match markdown_file {
                Some(path) => {
                    let markdown = std::fs::read_to_string(&path)
                        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                    IrBlueprint::new(raw, markdown, Utc::now())
                }
                None => IrBlueprint::verbatim(raw, Utc::now()),
            };
            save_ir(&store, &ir)?;
            tracing::info!(chars = ir.raw.chars().count(), "ir blueprint saved");
            println!("IR saved at {}", ir.saved_at.to_rfc3339());
        }
        IrAction::Show => match load_ir(&store)? {
            Some(ir) => println!("{}", serde_json::to_string_pretty(&ir)?),
            None => println!("No IR blueprint saved"),
        },
        IrAction::Export { output, stdout } => {
            let ir = load_ir(&store)?.ok_or("No IR blueprint saved")?;
            if stdout {
                write_output(None, &ir.markdown)?;
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from(IR_EXPORT_FILE));
                write_output(Some(&path), &ir.markdown)?;
                eprintln!("Exported IR markdown to {}", path.display());
            }
        }
    }
    Ok(())
}
