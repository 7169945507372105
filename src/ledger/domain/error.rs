//! Error types for task ledger domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating ledger domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerDomainError {
    /// A report window bound did not parse.
    #[error("invalid date '{0}', expected an RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidDate(String),

    /// The task already has an end timestamp.
    #[error("task {0} is already closed")]
    TaskAlreadyClosed(TaskId),
}
