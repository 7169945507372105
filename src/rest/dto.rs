//! REST DTOs and their conversions to and from domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::domain::User;
use crate::ledger::domain::Task;

/// REST representation of a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// User identifier.
    pub id: Uuid,
    /// Passport identifier in `SERIES NUMBER` form.
    pub passport_number: String,
    /// Family name.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Patronymic.
    pub patronymic: String,
    /// Postal address.
    pub address: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// REST payload for creating a user.
///
/// Identity fields are accepted for wire compatibility but discarded: the
/// persisted values always come from the enrichment lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
    /// Passport identifier in `SERIES NUMBER` form.
    pub passport_number: String,
    /// Ignored; enrichment supplies the stored value.
    #[serde(default)]
    pub surname: Option<String>,
    /// Ignored; enrichment supplies the stored value.
    #[serde(default)]
    pub name: Option<String>,
    /// Ignored; enrichment supplies the stored value.
    #[serde(default)]
    pub patronymic: Option<String>,
    /// Ignored; enrichment supplies the stored value.
    #[serde(default)]
    pub address: Option<String>,
}

/// REST payload replacing every mutable user field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserReq {
    /// Replacement passport identifier.
    pub passport_number: String,
    /// Replacement family name.
    pub surname: String,
    /// Replacement given name.
    pub name: String,
    /// Replacement patronymic.
    pub patronymic: String,
    /// Replacement postal address.
    pub address: String,
}

/// REST representation of a task interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier.
    pub id: Uuid,
    /// Owning user identifier.
    pub user_id: Uuid,
    /// Free-text description.
    pub description: String,
    /// Start timestamp.
    pub start_time: DateTime<Utc>,
    /// End timestamp, absent while the interval is open.
    pub end_time: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// REST payload for opening a task interval.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskReq {
    /// Free-text description of the work being started.
    #[serde(default)]
    pub description: String,
    /// Ignored; the start time is always server-assigned.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

/// REST payload identifying the interval to close.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTaskReq {
    /// Identifier of the task to close.
    pub task_id: Uuid,
}

/// Query parameters for the effort report.
#[derive(Debug, Clone, Deserialize)]
pub struct EffortsQuery {
    /// Inclusive lower bound, RFC 3339 or `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive upper bound, RFC 3339 or `YYYY-MM-DD`.
    pub end_date: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().into_inner(),
            passport_number: user.passport().to_string(),
            surname: user.surname().to_owned(),
            name: user.given_name().to_owned(),
            patronymic: user.patronymic().to_owned(),
            address: user.address().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            user_id: task.user_id().into_inner(),
            description: task.description().to_owned(),
            start_time: task.started_at(),
            end_time: task.ended_at(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}
