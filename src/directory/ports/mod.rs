//! Port contracts for the user directory.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services.

pub mod enrichment;
pub mod repository;

pub use enrichment::{EnrichmentError, EnrichmentGateway, EnrichmentResult};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
