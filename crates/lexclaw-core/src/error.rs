//! LexClaw error types.
//!
//! The retrieval core itself never fails — degenerate input degrades to
//! empty results or fixed messages. Errors only arise at the edges:
//! config load/save and index export I/O.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, LexClawError>;

#[derive(Debug, Error)]
pub enum LexClawError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
