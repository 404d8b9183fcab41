//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns belong to the export layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an out-of-bounds line-item index).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An attempt to shrink the line-item collection below one row.
    ///
    /// Recoverable; the document is left unchanged and the caller surfaces
    /// a user notice rather than a crash.
    #[error("a cash memo must keep at least one line item")]
    MinimumItemsViolation,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
