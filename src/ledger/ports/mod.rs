//! Port contracts for the task ledger.
//!
//! Ports define infrastructure-agnostic interfaces used by ledger services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
