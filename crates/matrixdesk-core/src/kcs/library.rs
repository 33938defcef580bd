//! Saved KCS documents, newest first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::KcsDocument;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KcsLibrary {
    documents: Vec<KcsDocument>,
}

impl KcsLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<KcsDocument>) -> Self {
        Self { documents }
    }

    /// Add a document at the front of the library.
    pub fn add(&mut self, doc: KcsDocument) {
        tracing::debug!(doc_id = %doc.doc_id, chunks = doc.chunks.len(), "document saved");
        self.documents.insert(0, doc);
    }

    /// Add imported documents, keeping their order, ahead of existing ones.
    /// Documents whose id is already present, in the library or earlier in
    /// `docs`, are skipped.
    ///
    /// Returns the number of documents added.
    pub fn merge(&mut self, docs: Vec<KcsDocument>) -> usize {
        let mut seen: HashSet<String> =
            self.documents.iter().map(|d| d.doc_id.clone()).collect();
        let fresh: Vec<_> = docs
            .into_iter()
            .filter(|d| seen.insert(d.doc_id.clone()))
            .collect();
        let added = fresh.len();
        self.documents.splice(0..0, fresh);
        added
    }

    pub fn get(&self, doc_id: &str) -> Option<&KcsDocument> {
        self.documents.iter().find(|d| d.doc_id == doc_id)
    }

    pub fn remove(&mut self, doc_id: &str) -> Option<KcsDocument> {
        let pos = self.documents.iter().position(|d| d.doc_id == doc_id)?;
        Some(self.documents.remove(pos))
    }

    pub fn summaries(&self) -> Vec<String> {
        self.documents.iter().map(KcsDocument::summary).collect()
    }

    pub fn documents(&self) -> &[KcsDocument] {
        &self.documents
    }

    pub fn total_chunks(&self) -> usize {
        self.documents.iter().map(|d| d.chunks.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
