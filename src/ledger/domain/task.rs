//! Task interval aggregate root.

use super::{LedgerDomainError, TaskId};
use crate::directory::domain::UserId;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single work interval owned by a user.
///
/// The owning user is a foreign relation: opening an interval performs no
/// existence check against the directory, and deleting a user leaves its
/// intervals in place. An interval is open while it has no end timestamp
/// and closed once stopped; closing is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    description: String,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning user identifier.
    pub user_id: UserId,
    /// Persisted free-text description.
    pub description: String,
    /// Persisted start timestamp.
    pub started_at: DateTime<Utc>,
    /// Persisted end timestamp, absent while open.
    pub ended_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Opens a new interval with the start time taken from the server
    /// clock. Client-supplied start times never reach this constructor.
    #[must_use]
    pub fn open(user_id: UserId, description: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            user_id,
            description: description.into(),
            started_at: timestamp,
            ended_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            description: data.description,
            started_at: data.started_at,
            ended_at: data.ended_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the end timestamp, absent while the interval is open.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
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

    /// Returns `true` while the interval has no end timestamp.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Returns the interval's effort (end minus start), or `None` while
    /// the interval is open.
    #[must_use]
    pub fn effort(&self) -> Option<TimeDelta> {
        self.ended_at.map(|ended| ended - self.started_at)
    }

    /// Closes the interval with the end time taken from the server clock,
    /// leaving the start time untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::TaskAlreadyClosed`] when the interval
    /// already has an end timestamp.
    pub fn close(&mut self, clock: &impl Clock) -> Result<(), LedgerDomainError> {
        if self.ended_at.is_some() {
            return Err(LedgerDomainError::TaskAlreadyClosed(self.id));
        }
        self.ended_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
