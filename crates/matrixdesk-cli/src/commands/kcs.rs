//! Knowledge compendium commands: chunk text, manage saved documents,
//! export and import.

use clap::Subcommand;
use matrixdesk_core::storage::{load_kcs, save_kcs};
use matrixdesk_core::{chunk_text, ChunkOptions, Config, ExportFormat, SqliteStore};
use std::path::PathBuf;

use super::{read_input, write_output};

#[derive(Subcommand)]
pub enum KcsAction {
    /// Chunk text and save it as a new document
    Chunk {
        /// Read text from a UTF-8 file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Inline text
        #[arg(long)]
        text: Option<String>,
        /// Characters per chunk (default from config)
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Characters shared by consecutive chunks (default from config)
        #[arg(long)]
        overlap: Option<usize>,
        /// Source label (defaults to the file name, or "manual")
        #[arg(long)]
        source: Option<String>,
    },
    /// List saved documents
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one document
    Show {
        /// Document ID
        doc_id: String,
    },
    /// Delete a saved document
    Remove {
        /// Document ID
        doc_id: String,
    },
    /// Export all documents
    Export {
        /// json or jsonl (default: from --output extension, else json)
        #[arg(long)]
        format: Option<ExportFormat>,
        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Import documents from a JSON or JSONL export
    Import {
        /// File to import
        path: PathBuf,
        /// json or jsonl (default: from the file extension)
        #[arg(long)]
        format: Option<ExportFormat>,
    },
}

pub fn run(action: KcsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;

    match action {
        KcsAction::Chunk {
            file,
            text,
            chunk_size,
            overlap,
            source,
        } => {
            let (content, file_name) = read_input(file.as_deref(), text)?;
            if content.trim().is_empty() {
                return Err("nothing to chunk: input text is empty".into());
            }
            let source = source
                .or(file_name)
                .unwrap_or_else(|| "manual".to_string());
            let options = ChunkOptions::new(
                chunk_size.unwrap_or(config.chunking.chunk_size),
                overlap.unwrap_or(config.chunking.overlap),
                source,
            );
            let doc = chunk_text(&content, &options)?;

            let mut library = load_kcs(&store)?;
            println!("{}", doc.summary());
            tracing::info!(doc_id = %doc.doc_id, chunks = doc.chunks.len(), "document chunked");
            library.add(doc);
            save_kcs(&store, &library)?;
        }
        KcsAction::List { json } => {
            let library = load_kcs(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(library.documents())?);
            } else if library.is_empty() {
                println!("No saved documents");
            } else {
                for line in library.summaries() {
                    println!("{line}");
                }
            }
        }
        KcsAction::Show { doc_id } => {
            let library = load_kcs(&store)?;
            let doc = library
                .get(&doc_id)
                .ok_or(format!("Document not found: {doc_id}"))?;
            println!("{}", serde_json::to_string_pretty(doc)?);
        }
        KcsAction::Remove { doc_id } => {
            let mut library = load_kcs(&store)?;
            library
                .remove(&doc_id)
                .ok_or(format!("Document not found: {doc_id}"))?;
            save_kcs(&store, &library)?;
            println!("Document removed: {doc_id}");
        }
        KcsAction::Export { format, output } => {
            let format = format
                .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
                .unwrap_or(ExportFormat::Json);
            let library = load_kcs(&store)?;
            let content = format.export(library.documents())?;
            write_output(output.as_deref(), &content)?;
            tracing::info!(%format, documents = library.len(), "exported documents");
            if let Some(path) = output {
                eprintln!(
                    "Exported {} documents, {} chunks to {}",
                    library.len(),
                    library.total_chunks(),
                    path.display()
                );
            }
        }
        KcsAction::Import { path, format } => {
            let format = format
                .or_else(|| ExportFormat::from_path(&path))
                .ok_or("cannot infer format from file extension; pass --format")?;
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let docs = format.import(&content)?;
            let total = docs.len();

            let mut library = load_kcs(&store)?;
            let added = library.merge(docs);
            save_kcs(&store, &library)?;
            tracing::info!(%format, added, total, "imported documents");
            println!("Imported {added} of {total} documents");
        }
    }
    Ok(())
}
