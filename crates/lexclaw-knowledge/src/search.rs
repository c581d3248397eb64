//! Lexical search — query-term substring matching with fractional scoring.

use serde::{Deserialize, Serialize};

use crate::store::{Document, KnowledgeBase};

/// One ranked hit. Ephemeral — computed per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Snapshot of the matching document.
    pub document: Document,
    /// Fraction of query terms found in the document, in [0, 1].
    pub score: f32,
    /// The query terms that matched, in query order.
    pub matched_terms: Vec<String>,
    pub match_count: usize,
}

/// Lowercase and whitespace-split a query into a set-like term list:
/// duplicates dropped, first-occurrence order preserved.
pub fn query_terms(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut terms: Vec<String> = Vec::new();
    for word in lowered.split_whitespace() {
        if !terms.iter().any(|t| t == word) {
            terms.push(word.to_string());
        }
    }
    terms
}

impl KnowledgeBase {
    /// Score every document against the query and return the top hits.
    ///
    /// A term matches when it occurs as a substring of the lowercased
    /// title + content — "python" matches inside "pythons". That looseness
    /// is intentional; tightening it to word boundaries would change
    /// observable ranking.
    ///
    /// Zero-match documents are excluded. Ties keep insertion order.
    /// A zero-term query (empty or all-whitespace) returns no hits.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        let terms = query_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult> = Vec::new();
        for doc in self.documents() {
            let haystack = format!("{} {}", doc.title, doc.content).to_lowercase();
            let matched: Vec<String> = terms
                .iter()
                .filter(|t| haystack.contains(t.as_str()))
                .cloned()
                .collect();
            if matched.is_empty() {
                continue;
            }

            let score = matched.len() as f32 / terms.len() as f32;
            results.push(SearchResult {
                document: doc.clone(),
                score,
                match_count: matched.len(),
                matched_terms: matched,
            });
        }

        // sort_by is stable: equal scores stay in insertion order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(max_results);

        tracing::debug!("Query '{query}': {} hit(s)", results.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_doc_kb() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        kb.add_document(
            "Python Basics",
            "Python is a language. It is easy.",
            "programming",
        );
        kb.add_document("Snakes", "Pythons are snakes found in forests.", "nature");
        kb
    }

    #[test]
    fn test_scoring_and_ranking() {
        let kb = two_doc_kb();
        let results = kb.search("python language", 2);

        assert_eq!(results.len(), 2);
        // Doc A matches both terms, Doc B matches "python" via "Pythons"
        assert_eq!(results[0].document.title, "Python Basics");
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].document.title, "Snakes");
        assert_eq!(results[1].score, 0.5);
        assert_eq!(results[1].matched_terms, vec!["python"]);
    }

    #[test]
    fn test_empty_knowledge_base() {
        let kb = KnowledgeBase::new();
        assert!(kb.search("anything at all", 5).is_empty());
    }

    #[test]
    fn test_empty_query() {
        let kb = two_doc_kb();
        assert!(kb.search("", 5).is_empty());
        assert!(kb.search("   ", 5).is_empty());
    }

    #[test]
    fn test_non_matching_document_excluded() {
        let mut kb = two_doc_kb();
        kb.add_document("Cooking", "Pasta with tomato sauce.", "food");
        let results = kb.search("python", 10);
        assert!(results.iter().all(|r| r.document.title != "Cooking"));
    }

    #[test]
    fn test_max_results_cap() {
        let mut kb = KnowledgeBase::new();
        for i in 0..10 {
            kb.add_document(&format!("Doc {i}"), "rust systems programming", "tech");
        }
        let results = kb.search("rust", 4);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.score > 0.0 && r.score <= 1.0));
    }

    #[test]
    fn test_ties_preserve_insertion_order() {
        let mut kb = KnowledgeBase::new();
        kb.add_document("First", "shared term here", "x");
        kb.add_document("Second", "shared term here", "x");
        kb.add_document("Third", "shared term here", "x");
        let results = kb.search("shared", 10);
        let titles: Vec<_> = results.iter().map(|r| r.document.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_duplicate_query_terms_deduplicated() {
        let kb = two_doc_kb();
        // "python python" is one distinct term; score stays in (0, 1]
        let results = kb.search("python python", 5);
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[0].matched_terms.len(), 1);
    }

    #[test]
    fn test_query_terms_set_like() {
        assert_eq!(query_terms("Python LANGUAGE python"), vec!["python", "language"]);
        assert!(query_terms("").is_empty());
    }

    #[test]
    fn test_title_matches_count() {
        let mut kb = KnowledgeBase::new();
        kb.add_document("Quantum Computing", "It uses qubits.", "tech");
        let results = kb.search("quantum", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1.0);
    }
}
