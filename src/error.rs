//! Error types
//!
//! Storage failures and list-level rejections. Nothing here is fatal: the UI
//! logs these and keeps running.

use thiserror::Error;

/// Failures talking to the key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to serialize list: {0}")]
    Serialize(String),
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// Reasons a list mutation did not happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Item text was blank after trimming
    #[error("item text is empty")]
    EmptyText,
    /// The mutation was rolled back because it could not be persisted
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type ListResult<T> = Result<T, ListError>;
