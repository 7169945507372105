//! Service layer for starting, stopping, and reporting task intervals.

use crate::directory::domain::UserId;
use crate::ledger::{
    domain::{LedgerDomainError, ReportWindow, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for opening a task interval.
///
/// Carries no start time on purpose: the start is always stamped from the
/// server clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTaskRequest {
    user_id: UserId,
    description: String,
}

impl StartTaskRequest {
    /// Creates a request for the given user and description.
    #[must_use]
    pub fn new(user_id: UserId, description: impl Into<String>) -> Self {
        Self {
            user_id,
            description: description.into(),
        }
    }
}

/// Policy governing how many open intervals a user may hold at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenTaskPolicy {
    /// Any number of concurrently open intervals.
    #[default]
    Unrestricted,
    /// At most one open interval per user; a second start is a conflict.
    SingleOpen,
}

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LedgerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The open-task policy rejected a second concurrent interval.
    #[error("user {0} already has an open task")]
    OpenTaskConflict(UserId),
}

/// Result type for ledger service operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Task ledger orchestration service.
#[derive(Clone)]
pub struct TaskLedgerService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: OpenTaskPolicy,
}

impl<R, C> TaskLedgerService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task ledger service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, policy: OpenTaskPolicy) -> Self {
        Self {
            repository,
            clock,
            policy,
        }
    }

    /// Opens a task interval with the start time taken from the server
    /// clock. The owning user is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::OpenTaskConflict`] under
    /// [`OpenTaskPolicy::SingleOpen`] when the user already has an open
    /// interval, and [`LedgerError::Repository`] when persistence fails.
    pub async fn start_task(&self, request: StartTaskRequest) -> LedgerResult<Task> {
        if self.policy == OpenTaskPolicy::SingleOpen {
            let open = self.repository.find_open_for_user(request.user_id).await?;
            if !open.is_empty() {
                return Err(LedgerError::OpenTaskConflict(request.user_id));
            }
        }

        let task = Task::open(request.user_id, request.description, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Closes the interval with the given identifier, stamping the end
    /// time from the server clock and leaving the start time untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the identifier does not
    /// resolve, and [`LedgerError::Domain`] when the interval is already
    /// closed.
    pub async fn stop_task(&self, id: TaskId) -> LedgerResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        task.close(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Reports the user's closed intervals lying within the inclusive
    /// date window, ordered by effort descending (ties by start time
    /// ascending). Open intervals are never reported.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Domain`] when either date string fails to
    /// parse, and [`LedgerError::Repository`] when the query fails.
    pub async fn user_efforts(
        &self,
        user_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> LedgerResult<Vec<Task>> {
        let window = ReportWindow::parse(start_date, end_date)?;
        Ok(self.repository.closed_within(user_id, &window).await?)
    }
}
