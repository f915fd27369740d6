//! Store error model.

use thiserror::Error;

use crate::name::DocName;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on the two caller-recoverable outcomes: a bad identifier
/// and an injected network failure. Neither leaves the store in a partially
/// mutated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced document does not exist in the targeted collection.
    #[error("document not found: {0}")]
    NotFound(DocName),

    /// Simulated network failure. The wrapped store operation never ran, so
    /// retrying is always safe.
    #[error("network error: please try again")]
    Transient,
}

impl StoreError {
    pub fn not_found(name: impl Into<DocName>) -> Self {
        Self::NotFound(name.into())
    }

    /// Whether a retry of the same call can succeed without caller-side fixes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_missing_name() {
        let err = StoreError::not_found("SO-MISSING01");
        assert_eq!(err.to_string(), "document not found: SO-MISSING01");
        assert!(!err.is_retryable());
    }

    #[test]
    fn transient_is_retryable() {
        assert!(StoreError::Transient.is_retryable());
    }
}
