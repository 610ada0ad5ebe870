//! Mutation chaining error types.

use thiserror::Error;

/// Result type for mutation chaining operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Error type produced by caller-supplied linking functions.
///
/// Opaque to this crate: whatever the domain side effect fails with is
/// carried as the source of [`MutationError::LinkFailure`].
pub type LinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while chaining mutations.
///
/// All variants surface at the consuming mutation's resolution boundary
/// as an ordinary operation failure. None of them roll back previously
/// captured registry entries or previously completed mutations, and none
/// are retryable within the same execution: a reference made before its
/// target resolved can only be fixed by reordering the query document.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("unresolved reference: no result captured under alias {alias:?}")]
    UnresolvedReference { alias: String },

    #[error("type mismatch for alias {alias:?}: expected {expected}, got {actual}")]
    TypeMismatch {
        alias: String,
        expected: String,
        actual: String,
    },

    #[error("invalid arity: expected {expected} aliases, got {actual} for edge {edge}")]
    InvalidArity {
        edge: String,
        expected: usize,
        actual: usize,
    },

    #[error("link failure: {source}")]
    LinkFailure {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MutationError {
    pub fn unresolved_reference(alias: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            alias: alias.into(),
        }
    }

    pub fn type_mismatch(
        alias: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            alias: alias.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_arity(edge: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidArity {
            edge: edge.into(),
            expected,
            actual,
        }
    }

    pub fn link_failure(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::LinkFailure {
            source: source.into(),
        }
    }
}
