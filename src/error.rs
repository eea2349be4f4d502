//! Error types shared across the crate.

use thiserror::Error;

/// Failures an object lookup or identifier check can report.
///
/// Both variants carry a fixed message and no payload. Callers receive them
/// as plain `Result` values and decide locally what to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The requested object does not exist.
    #[error("Object not found!")]
    NotFound,
    /// The supplied identifier failed validation.
    #[error("Invalid ID!")]
    InvalidId,
}

/// Failures reported by an identifier generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    /// The generator cannot produce another identifier.
    #[error("identifier generator exhausted")]
    Exhausted,
}
