//! Error types for user directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The passport identifier is not a "SERIES NUMBER" pair.
    #[error("invalid passport identifier '{0}', expected 'SERIES NUMBER'")]
    InvalidPassport(String),
}
