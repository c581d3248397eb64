//! # LexClaw Knowledge Base
//!
//! Ultra-lightweight lexical RAG — no vector DB, no embeddings, no ML.
//! Everything lives in memory and every operation is plain string work.
//!
//! ## Design
//! - **Append-only store** — documents get auto-incremented ids, never mutate
//! - **Term-overlap scoring** — fraction of query terms found per document
//! - **Substring matching** — "python" matches inside "pythons", on purpose
//! - **Extractive answers** — first relevant sentence per retrieved document
//! - No failure paths: degenerate input degrades to empty results or a
//!   fixed message, never an error
//!
//! ## How it works
//! ```text
//! User: "how do plants make food?"
//!   ↓
//! RagEngine.ask("how do plants make food?")
//!   ↓ term overlap + stable ranking
//! Top 3 documents from the knowledge base
//!   ↓ first matching sentence per document
//! "Based on my knowledge base: ..." + sources line
//! ```

pub mod answer;
pub mod engine;
pub mod export;
pub mod search;
pub mod store;

pub use engine::{AskResponse, RagEngine};
pub use export::KnowledgeStats;
pub use search::SearchResult;
pub use store::{Document, KnowledgeBase};
