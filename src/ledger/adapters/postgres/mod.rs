//! `PostgreSQL` adapters for task ledger persistence.

mod models;
mod repository;
mod schema;

pub use repository::{LedgerPgPool, PostgresTaskRepository};
