//! User aggregate root.

use super::{EnrichedProfile, PassportId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Personnel identity record.
///
/// Identity fields (surname, given name, patronymic, address) are never
/// client-supplied at creation time; they always come from a successful
/// enrichment lookup. Updates replace fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    passport: PassportId,
    surname: String,
    given_name: String,
    patronymic: String,
    address: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted passport identifier.
    pub passport: PassportId,
    /// Persisted family name.
    pub surname: String,
    /// Persisted given name.
    pub given_name: String,
    /// Persisted patronymic.
    pub patronymic: String,
    /// Persisted postal address.
    pub address: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Replacement values for every mutable user field.
///
/// Applied verbatim: update performs no enrichment and no content checks
/// beyond the passport format invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// Replacement passport identifier.
    pub passport: PassportId,
    /// Replacement family name.
    pub surname: String,
    /// Replacement given name.
    pub given_name: String,
    /// Replacement patronymic.
    pub patronymic: String,
    /// Replacement postal address.
    pub address: String,
}

impl User {
    /// Creates a new user from a validated passport and an enrichment
    /// result, discarding any client-supplied identity fields.
    #[must_use]
    pub fn new_enriched(passport: PassportId, profile: EnrichedProfile, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            passport,
            surname: profile.surname,
            given_name: profile.given_name,
            patronymic: profile.patronymic,
            address: profile.address,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            passport: data.passport,
            surname: data.surname,
            given_name: data.given_name,
            patronymic: data.patronymic,
            address: data.address,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the passport identifier.
    #[must_use]
    pub const fn passport(&self) -> &PassportId {
        &self.passport
    }

    /// Returns the family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the given name.
    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Returns the patronymic.
    #[must_use]
    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every mutable field with the supplied values and refreshes
    /// the update timestamp.
    pub fn apply_update(&mut self, update: UserUpdate, clock: &impl Clock) {
        self.passport = update.passport;
        self.surname = update.surname;
        self.given_name = update.given_name;
        self.patronymic = update.patronymic;
        self.address = update.address;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
