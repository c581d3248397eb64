//! JSON index export — documents plus summary statistics.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use lexclaw_core::error::{LexClawError, Result};

use crate::store::{Document, KnowledgeBase};

/// Summary statistics over the knowledge base.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStats {
    pub total_documents: usize,
    pub total_words: usize,
}

#[derive(Serialize)]
struct IndexExport<'a> {
    documents: &'a [Document],
    stats: KnowledgeStats,
    exported_at: String,
}

impl KnowledgeBase {
    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            total_documents: self.len(),
            total_words: self.total_words(),
        }
    }

    /// Write the full collection plus stats to a pretty-printed JSON file.
    pub fn export_index(&self, path: &Path) -> Result<()> {
        let export = IndexExport {
            documents: self.documents(),
            stats: self.stats(),
            exported_at: Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&export)?;
        std::fs::write(path, json)
            .map_err(|e| LexClawError::Export(format!("Failed to write {}: {e}", path.display())))?;

        tracing::info!("Exported {} document(s) to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut kb = KnowledgeBase::new();
        kb.add_document("A", "one two three", "x");
        kb.add_document("B", "four five", "y");
        let stats = kb.stats();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_words, 5);
    }

    #[test]
    fn test_export_writes_valid_json() {
        let mut kb = KnowledgeBase::new();
        kb.add_document("A", "one two", "x");

        let path = std::env::temp_dir().join("lexclaw_export_test.json");
        kb.export_index(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["stats"]["total_documents"], 1);
        assert_eq!(value["documents"][0]["title"], "A");
        assert_eq!(value["documents"][0]["word_count"], 2);
        assert!(value["exported_at"].is_string());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_empty_base() {
        let kb = KnowledgeBase::new();
        let path = std::env::temp_dir().join("lexclaw_export_empty_test.json");
        kb.export_index(&path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["stats"]["total_documents"], 0);
        std::fs::remove_file(&path).ok();
    }
}
