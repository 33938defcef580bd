//! JSON and JSONL export/import of KCS documents.
//!
//! - JSON: a single pretty-printed array of documents.
//! - JSONL: one compact document per line, newline-terminated.
//!
//! Both formats map fields directly; importing an export yields the same
//! document collection.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result, ValidationError};

use super::KcsDocument;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Jsonl,
}

impl ExportFormat {
    /// Default file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Default export file name, e.g. `kcs.jsonl`.
    pub fn file_name(&self) -> String {
        format!("kcs.{}", self.extension())
    }

    /// Guess the format from a file name's extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }

    pub fn export(&self, docs: &[KcsDocument]) -> Result<String> {
        match self {
            ExportFormat::Json => export_json(docs),
            ExportFormat::Jsonl => export_jsonl(docs),
        }
    }

    pub fn import(&self, content: &str) -> Result<Vec<KcsDocument>> {
        match self {
            ExportFormat::Json => import_json(content),
            ExportFormat::Jsonl => import_jsonl(content),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            other => Err(ValidationError::InvalidValue {
                field: "format".into(),
                message: format!("unsupported export format '{other}'"),
            }),
        }
    }
}

/// Serialize documents as a pretty-printed JSON array.
pub fn export_json(docs: &[KcsDocument]) -> Result<String> {
    Ok(serde_json::to_string_pretty(docs)?)
}

/// Serialize documents as newline-delimited JSON, one document per line.
pub fn export_jsonl(docs: &[KcsDocument]) -> Result<String> {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&serde_json::to_string(doc)?);
        out.push('\n');
    }
    Ok(out)
}

/// Parse a JSON array of documents.
pub fn import_json(content: &str) -> Result<Vec<KcsDocument>> {
    let docs: Vec<KcsDocument> = serde_json::from_str(content)?;
    tracing::debug!(count = docs.len(), "imported json documents");
    Ok(docs)
}

/// Parse newline-delimited JSON documents. Blank lines are skipped.
///
/// # Errors
/// Reports the 1-based line number of the first line that fails to parse.
pub fn import_jsonl(content: &str) -> Result<Vec<KcsDocument>> {
    let mut docs = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let doc = serde_json::from_str(line)
            .map_err(|e| CoreError::Custom(format!("invalid JSONL at line {}: {e}", i + 1)))?;
        docs.push(doc);
    }
    tracing::debug!(count = docs.len(), "imported jsonl documents");
    Ok(docs)
}
