//! REST boundary for timecard.
//!
//! Thin transport layer over the directory and ledger services: DTOs in
//! [`dto`], axum handlers in [`handlers`], route wiring in [`routes`], and
//! error-to-status mapping in [`error`]. No domain rules live here.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

use crate::directory::{
    ports::{EnrichmentGateway, UserRepository},
    services::UserDirectoryService,
};
use crate::ledger::{ports::TaskRepository, services::TaskLedgerService};
use mockable::Clock;

/// Shared handler state bundling the two application services.
#[derive(Clone)]
pub struct AppState<R, E, C, T>
where
    R: UserRepository,
    E: EnrichmentGateway,
    C: Clock + Send + Sync,
    T: TaskRepository,
{
    /// User directory service.
    pub directory: UserDirectoryService<R, E, C>,
    /// Task ledger service.
    pub ledger: TaskLedgerService<T, C>,
}

impl<R, E, C, T> AppState<R, E, C, T>
where
    R: UserRepository,
    E: EnrichmentGateway,
    C: Clock + Send + Sync,
    T: TaskRepository,
{
    /// Bundles the services into handler state.
    #[must_use]
    pub const fn new(
        directory: UserDirectoryService<R, E, C>,
        ledger: TaskLedgerService<T, C>,
    ) -> Self {
        Self { directory, ledger }
    }
}
