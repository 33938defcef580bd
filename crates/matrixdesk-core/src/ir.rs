//! Instructional ruleset (IR) blueprint record.
//!
//! Pairs raw rule text with its markdown rendering and the time it was saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default file name for the markdown export.
pub const IR_EXPORT_FILE: &str = "ir.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrBlueprint {
    pub raw: String,
    pub markdown: String,
    pub saved_at: DateTime<Utc>,
}

impl IrBlueprint {
    pub fn new(raw: impl Into<String>, markdown: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        Self {
            raw: raw.into(),
            markdown: markdown.into(),
            saved_at,
        }
    }

    /// Blueprint whose markdown body is the raw text unchanged.
    pub fn verbatim(raw: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        let raw = raw.into();
        Self {
            markdown: raw.clone(),
            raw,
            saved_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }
}
