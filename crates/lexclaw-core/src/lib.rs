//! # LexClaw Core
//!
//! Shared configuration and error types for the LexClaw workspace.

pub mod config;
pub mod error;

pub use config::LexClawConfig;
pub use error::{LexClawError, Result};
