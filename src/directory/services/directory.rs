//! Service layer for user creation, listing, update, and deletion.

use crate::directory::{
    domain::{PassportId, User, UserDomainError, UserId, UserUpdate},
    ports::{EnrichmentError, EnrichmentGateway, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a user from a passport identifier.
///
/// Identity fields are deliberately absent: whatever a client supplies
/// alongside the passport is discarded in favour of the enrichment result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    passport_number: String,
}

impl CreateUserRequest {
    /// Creates a request from the raw `"SERIES NUMBER"` passport string.
    #[must_use]
    pub fn new(passport_number: impl Into<String>) -> Self {
        Self {
            passport_number: passport_number.into(),
        }
    }
}

/// Request payload replacing every mutable user field verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    passport_number: String,
    surname: String,
    given_name: String,
    patronymic: String,
    address: String,
}

impl UpdateUserRequest {
    /// Creates a full-replacement update request.
    #[must_use]
    pub fn new(
        passport_number: impl Into<String>,
        surname: impl Into<String>,
        given_name: impl Into<String>,
        patronymic: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            passport_number: passport_number.into(),
            surname: surname.into(),
            given_name: given_name.into(),
            patronymic: patronymic.into(),
            address: address.into(),
        }
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The enrichment lookup failed.
    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R, E, C>
where
    R: UserRepository,
    E: EnrichmentGateway,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    enrichment: Arc<E>,
    clock: Arc<C>,
}

impl<R, E, C> UserDirectoryService<R, E, C>
where
    R: UserRepository,
    E: EnrichmentGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, enrichment: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            repository,
            enrichment,
            clock,
        }
    }

    /// Returns all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the listing fails.
    pub async fn list(&self) -> DirectoryResult<Vec<User>> {
        Ok(self.repository.list().await?)
    }

    /// Creates a user from a passport identifier.
    ///
    /// Validates the passport format, resolves the identity profile through
    /// the enrichment port, and persists the enriched record. Nothing is
    /// persisted when enrichment fails.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Domain`] for a malformed passport,
    /// [`DirectoryError::Enrichment`] when the lookup fails, and
    /// [`DirectoryError::Repository`] when persistence rejects the record
    /// (including duplicate passports).
    pub async fn create(&self, request: CreateUserRequest) -> DirectoryResult<User> {
        let CreateUserRequest { passport_number } = request;
        let passport = PassportId::parse(&passport_number)?;
        let profile = self.enrichment.lookup(&passport).await?;
        let user = User::new_enriched(passport, profile, &*self.clock);
        self.repository.insert(&user).await?;
        Ok(user)
    }

    /// Replaces every mutable field of an existing user, with no
    /// re-enrichment.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Domain`] for a malformed replacement
    /// passport and [`DirectoryError::Repository`] when the user does not
    /// exist or the new passport collides with another user's.
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> DirectoryResult<User> {
        let passport = PassportId::parse(&request.passport_number)?;
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound(id))?;

        user.apply_update(
            UserUpdate {
                passport,
                surname: request.surname,
                given_name: request.given_name,
                patronymic: request.patronymic,
                address: request.address,
            },
            &*self.clock,
        );
        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Removes a user record.
    ///
    /// Task intervals referencing the user are left in place: deleting a
    /// user does not cascade into the ledger, so orphaned intervals remain
    /// reportable.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the user does not exist
    /// or the deletion fails.
    pub async fn delete(&self, id: UserId) -> DirectoryResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
