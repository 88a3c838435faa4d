//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic request-scoped failures. Transport
/// concerns (status codes, response bodies) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested document was not found.
    #[error("not found")]
    NotFound,

    /// No usable credential was presented.
    #[error("unauthorized")]
    Unauthenticated,

    /// A valid credential lacked the required scope or role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The store or gateway was unreachable or returned an error.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
