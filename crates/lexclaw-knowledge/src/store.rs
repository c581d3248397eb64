//! In-memory document store — ordered, append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single document in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// Whitespace-delimited token count of `content`, fixed at insertion.
    pub word_count: usize,
    pub added_at: DateTime<Utc>,
}

fn default_category() -> String { "general".into() }

/// Ordered, append-only collection of documents. Insertion order is
/// preserved and doubles as the tiebreaker when search scores are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
    next_id: u64,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document and return its assigned id. Empty titles and
    /// contents are allowed (an empty content yields word_count 0).
    pub fn add_document(&mut self, title: &str, content: &str, category: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let word_count = content.split_whitespace().count();
        self.documents.push(Document {
            id,
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            word_count,
            added_at: Utc::now(),
        });

        tracing::debug!("Indexed '{title}' (id {id}, {word_count} words)");
        id
    }

    /// Look up a document by id.
    pub fn get(&self, id: u64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// All documents, in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total word count across all documents.
    pub fn total_words(&self) -> usize {
        self.documents.iter().map(|d| d.word_count).sum()
    }
}
