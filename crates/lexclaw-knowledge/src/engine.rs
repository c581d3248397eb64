//! The ask pipeline — retrieval, then extractive generation.

use serde::Serialize;

use lexclaw_core::LexClawConfig;

use crate::answer::{extract_fragments, generate_answer};
use crate::search::SearchResult;
use crate::store::KnowledgeBase;

/// Everything the pipeline knows about one answered question.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    /// Titles of documents that contributed a sentence, ranked order.
    pub sources: Vec<String>,
    pub results: Vec<SearchResult>,
    /// True iff search retrieved at least one document.
    pub success: bool,
}

/// Explicitly constructed retrieval context — owns the knowledge base.
/// No process-wide singletons: callers create one and pass it around.
///
/// Mutation happens only through [`RagEngine::add_document`]; everything
/// else reads. Single-threaded by design — wrap in `RwLock` (writes
/// exclusive, reads shared) if threads are ever introduced.
pub struct RagEngine {
    kb: KnowledgeBase,
    max_results: usize,
}

impl RagEngine {
    /// Create an empty engine using the configured search defaults.
    pub fn new(config: &LexClawConfig) -> Self {
        Self {
            kb: KnowledgeBase::new(),
            max_results: config.search.max_results,
        }
    }

    /// Create an empty engine with an explicit retrieval limit.
    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            kb: KnowledgeBase::new(),
            max_results,
        }
    }

    /// Append a document to the knowledge base; returns its id.
    pub fn add_document(&mut self, title: &str, content: &str, category: &str) -> u64 {
        self.kb.add_document(title, content, category)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Ranked lexical search over the knowledge base.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.kb.search(query, max_results)
    }

    /// Full pipeline: search, synthesize, package. Never fails — a question
    /// with no hits yields a fixed message and `success: false`.
    pub fn ask(&self, question: &str) -> AskResponse {
        let results = self.kb.search(question, self.max_results);
        let answer = generate_answer(question, &results);
        let sources = extract_fragments(question, &results)
            .into_iter()
            .map(|f| f.source_title)
            .collect();

        tracing::info!("Answered '{question}' from {} document(s)", results.len());
        AskResponse {
            question: question.to_string(),
            answer,
            sources,
            success: !results.is_empty(),
            results,
        }
    }
}
