//! Framework error type.
//!
//! Sub-crates define their own error enums for crate-specific failure modes
//! and convert into or wrap `CoreError` as needed; both patterns are
//! acceptable, prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `slam-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all crates in this workspace.
pub type CoreResult<T> = Result<T, CoreError>;
