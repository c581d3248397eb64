//! Extractive answer synthesis from ranked search results.
//!
//! No generation model: the answer is stitched together from the first
//! query-relevant sentence of each retrieved document, with a sources line.

use crate::search::{SearchResult, query_terms};

/// Returned when search produced no results at all.
pub const NOT_FOUND_MESSAGE: &str =
    "Sorry, I couldn't find any relevant information in my knowledge base.";

/// Returned when documents were retrieved but no sentence matched.
pub const NO_EXTRACT_MESSAGE: &str =
    "I found relevant documents but couldn't extract a specific answer. Please try rephrasing your question.";

/// A sentence lifted from a source document, with attribution.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub sentence: String,
    pub source_title: String,
}

/// Pull the first query-relevant sentence out of each result, ranked order.
///
/// Sentences are split on the literal ". " — naive (abbreviations, decimal
/// numbers), but kept as a fixed policy: upgrading to a real sentence
/// tokenizer would change observable answers.
pub fn extract_fragments(query: &str, results: &[SearchResult]) -> Vec<Fragment> {
    let terms = query_terms(query);
    let mut fragments = Vec::new();

    for result in results {
        let relevant = result.document.content.split(". ").map(str::trim).find(|s| {
            let lowered = s.to_lowercase();
            terms.iter().any(|t| lowered.contains(t.as_str()))
        });
        if let Some(sentence) = relevant {
            fragments.push(Fragment {
                sentence: sentence.to_string(),
                source_title: result.document.title.clone(),
            });
        }
    }

    fragments
}

/// Assemble an extractive answer from ranked search results.
///
/// Fragments are joined with single spaces behind a fixed preamble,
/// terminated with a period, followed by a sources line naming every
/// document that contributed a sentence.
pub fn generate_answer(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    let fragments = extract_fragments(query, results);
    if fragments.is_empty() {
        return NO_EXTRACT_MESSAGE.to_string();
    }

    let body = fragments
        .iter()
        .map(|f| f.sentence.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut answer = format!("Based on my knowledge base: {body}");
    if !answer.ends_with('.') {
        answer.push('.');
    }

    let sources = fragments
        .iter()
        .map(|f| f.source_title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    answer.push_str("\n\nSources: ");
    answer.push_str(&sources);

    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KnowledgeBase;

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
    fn test_answer_from_two_documents() {
        let kb = two_doc_kb();
        let results = kb.search("python language", 2);
        let answer = generate_answer("python language", &results);

        assert!(answer.starts_with("Based on my knowledge base: Python is a language"));
        let sources_line = answer.rsplit("\n\n").next().unwrap();
        assert!(sources_line.starts_with("Sources: "));
        assert!(sources_line.contains("Python Basics"));
        assert!(sources_line.contains("Snakes"));
    }

    #[test]
    fn test_no_results_message() {
        let answer = generate_answer("anything", &[]);
        assert_eq!(answer, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_answer_terminated_with_period() {
        let mut kb = KnowledgeBase::new();
        kb.add_document("Rust", "Rust is fast", "programming");
        let results = kb.search("rust", 1);
        let answer = generate_answer("rust", &results);
        let body = answer.split("\n\n").next().unwrap();
        assert!(body.ends_with('.'));
    }

    #[test]
    fn test_fragments_one_sentence_per_document() {
        let kb = two_doc_kb();
        let results = kb.search("python", 2);
        let fragments = extract_fragments("python", &results);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].sentence, "Python is a language");
        assert_eq!(fragments[0].source_title, "Python Basics");
    }

    #[test]
    fn test_no_extract_message_when_sentences_miss() {
        // Title matches the query but no content sentence does.
        let mut kb = KnowledgeBase::new();
        kb.add_document("Gardening", "Tomatoes need sun. Water them daily.", "hobby");
        let results = kb.search("gardening", 1);
        assert_eq!(results.len(), 1);
        let answer = generate_answer("gardening", &results);
        assert_eq!(answer, NO_EXTRACT_MESSAGE);
    }
}
