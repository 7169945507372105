//! Axum handlers bridging the REST routes onto the application services.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum handlers receive extractors by value"
)]

use std::sync::Arc;

use axum::Extension;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use mockable::Clock;
use tracing::info;
use uuid::Uuid;

use crate::directory::domain::UserId;
use crate::directory::ports::{EnrichmentGateway, UserRepository};
use crate::directory::services::{CreateUserRequest, UpdateUserRequest};
use crate::ledger::domain::TaskId;
use crate::ledger::ports::TaskRepository;
use crate::ledger::services::StartTaskRequest;
use crate::rest::AppState;
use crate::rest::dto::{
    CreateUserReq, EffortsQuery, StartTaskReq, StopTaskReq, TaskDto, UpdateUserReq, UserDto,
};
use crate::rest::error::ApiError;

/// Lists all users in insertion order.
pub async fn list_users<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
) -> Result<Json<Vec<UserDto>>, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    let users = state.directory.list().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Creates a user from a passport identifier.
///
/// Any identity fields in the request body are discarded; the stored
/// values come from the enrichment lookup.
pub async fn create_user<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Json(req): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!("creating user");
    let user = state
        .directory
        .create(CreateUserRequest::new(req.passport_number))
        .await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Replaces every mutable field of an existing user.
pub async fn update_user<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!(user_id = %id, "updating user");
    let user = state
        .directory
        .update(
            UserId::from_uuid(id),
            UpdateUserRequest::new(
                req.passport_number,
                req.surname,
                req.name,
                req.patronymic,
                req.address,
            ),
        )
        .await?;
    Ok(Json(UserDto::from(user)))
}

/// Deletes a user record, leaving its task intervals in place.
pub async fn delete_user<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!(user_id = %id, "deleting user");
    state.directory.delete(UserId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Opens a task interval for the user in the path.
///
/// Any start time in the request body is discarded; the start is always
/// server-assigned.
pub async fn start_task<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartTaskReq>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!(user_id = %id, "starting task");
    let task = state
        .ledger
        .start_task(StartTaskRequest::new(
            UserId::from_uuid(id),
            req.description,
        ))
        .await?;
    Ok(Json(TaskDto::from(task)))
}

/// Closes the task named in the request body.
///
/// Stops resolve strictly by task identifier; the user segment in the
/// path only scopes the route.
pub async fn stop_task<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Path(_user_id): Path<Uuid>,
    Json(req): Json<StopTaskReq>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!(task_id = %req.task_id, "stopping task");
    let task = state.ledger.stop_task(TaskId::from_uuid(req.task_id)).await?;
    Ok(Json(TaskDto::from(task)))
}

/// Reports the user's closed intervals within the query window, longest
/// effort first.
pub async fn user_efforts<R, E, C, T>(
    Extension(state): Extension<Arc<AppState<R, E, C, T>>>,
    Path(id): Path<Uuid>,
    Query(query): Query<EffortsQuery>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    info!(user_id = %id, "reporting user efforts");
    let tasks = state
        .ledger
        .user_efforts(UserId::from_uuid(id), &query.start_date, &query.end_date)
        .await?;
    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}
