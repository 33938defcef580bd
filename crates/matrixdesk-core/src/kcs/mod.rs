//! Knowledge compendium (KCS) chunking.
//!
//! Splits text into fixed-size, overlapping chunks measured in characters
//! (Unicode scalar values, never bytes) and wraps them into a [`KcsDocument`].
//!
//! # Algorithm
//!
//! 1. Reject `chunk_size == 0` and `overlap >= chunk_size`.
//! 2. Take `chunk_size` characters starting at offset 0.
//! 3. Advance the start by `chunk_size - overlap` and repeat.
//! 4. Stop after the first chunk that reaches the end of the text.
//!
//! ```rust
//! use matrixdesk_core::kcs::{chunk_text, ChunkOptions};
//!
//! let doc = chunk_text("abcdefghij", &ChunkOptions::new(4, 1, "manual")).unwrap();
//! let texts: Vec<_> = doc.chunks.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, ["abcd", "defg", "ghij"]);
//! ```

pub mod export;
pub mod library;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ChunkError;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1200;
/// Default overlap in characters.
pub const DEFAULT_OVERLAP: usize = 120;

/// Chunking parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOptions {
    pub chunk_size: usize,
    pub overlap: usize,
    /// Recorded verbatim on the document, e.g. a file name or `"manual"`
    pub source: String,
}

impl ChunkOptions {
    pub fn new(chunk_size: usize, overlap: usize, source: impl Into<String>) -> Self {
        Self {
            chunk_size,
            overlap,
            source: source.into(),
        }
    }

    /// Check the size/overlap combination.
    ///
    /// # Errors
    /// Returns a [`ChunkError`] if the step between chunks would be zero.
    pub fn validate(&self) -> Result<(), ChunkError> {
        validate_params(self.chunk_size, self.overlap)
    }

    /// Characters between the starts of consecutive chunks.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

/// Check a chunk size / overlap pair without building options.
pub fn validate_params(chunk_size: usize, overlap: usize) -> Result<(), ChunkError> {
    if chunk_size == 0 {
        return Err(ChunkError::ZeroChunkSize);
    }
    if overlap >= chunk_size {
        return Err(ChunkError::OverlapTooLarge {
            chunk_size,
            overlap,
        });
    }
    Ok(())
}

/// One chunk of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KcsChunk {
    /// `<docId>:<index>`
    pub chunk_id: String,
    pub index: usize,
    /// Character offset of the first character (inclusive)
    pub start: usize,
    /// Character offset after the last character (exclusive)
    pub end: usize,
    pub text: String,
}

impl KcsChunk {
    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// A chunked text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KcsDocument {
    pub doc_id: String,
    pub source: String,
    pub chunks: Vec<KcsChunk>,
}

impl KcsDocument {
    /// Rebuild the original text by dropping each chunk's overlap with its
    /// predecessor.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        let mut covered: usize = 0;
        for chunk in &self.chunks {
            let skip = covered.saturating_sub(chunk.start);
            out.extend(chunk.text.chars().skip(skip));
            covered = covered.max(chunk.end);
        }
        out
    }

    /// Total characters covered by the chunks.
    pub fn char_len(&self) -> usize {
        self.chunks.last().map(|c| c.end).unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        format!(
            "Doc: {} · Source: {} · Chunks: {}",
            self.doc_id,
            self.source,
            self.chunks.len()
        )
    }
}

/// Chunk `text` into a new document with a random id.
///
/// # Errors
/// Returns a [`ChunkError`] for invalid size/overlap combinations.
pub fn chunk_text(text: &str, options: &ChunkOptions) -> Result<KcsDocument, ChunkError> {
    chunk_text_with_id(Uuid::new_v4().to_string(), text, options)
}

/// Chunk `text` into a document with the given id.
///
/// # Errors
/// Returns a [`ChunkError`] for invalid size/overlap combinations.
pub fn chunk_text_with_id(
    doc_id: impl Into<String>,
    text: &str,
    options: &ChunkOptions,
) -> Result<KcsDocument, ChunkError> {
    options.validate()?;
    let doc_id = doc_id.into();

    // Byte offset of every char boundary, including the end of the text.
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());
    let char_count = bounds.len() - 1;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < char_count {
        let end = (start + options.chunk_size).min(char_count);
        let index = chunks.len();
        chunks.push(KcsChunk {
            chunk_id: format!("{doc_id}:{index}"),
            index,
            start,
            end,
            text: text[bounds[start]..bounds[end]].to_string(),
        });
        if end == char_count {
            break;
        }
        start += options.stride();
    }

    tracing::debug!(
        doc_id = %doc_id,
        source = %options.source,
        chars = char_count,
        chunks = chunks.len(),
        "text chunked"
    );

    Ok(KcsDocument {
        doc_id,
        source: options.source.clone(),
        chunks,
    })
}
