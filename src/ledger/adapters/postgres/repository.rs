//! `PostgreSQL` repository implementation for task ledger storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::directory::domain::UserId;
use crate::ledger::{
    domain::{PersistedTaskData, ReportWindow, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by ledger adapters.
pub type LedgerPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: LedgerPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LedgerPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let description = task.description().to_owned();
        let started_at = task.started_at();
        let ended_at = task.ended_at();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set((
                    tasks::description.eq(description),
                    tasks::started_at.eq(started_at),
                    tasks::ended_at.eq(ended_at),
                    tasks::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn find_open_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(
                    tasks::user_id
                        .eq(user_id.into_inner())
                        .and(tasks::ended_at.is_null()),
                )
                .order(tasks::started_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn closed_within(
        &self,
        user_id: UserId,
        window: &ReportWindow,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let window_start = window.start();
        let window_end = window.end();

        self.run_blocking(move |connection| {
            let query = diesel::sql_query(concat!(
                "SELECT id, user_id, description, started_at, ended_at, created_at, updated_at ",
                "FROM tasks ",
                "WHERE user_id = $1 ",
                "AND ended_at IS NOT NULL ",
                "AND started_at >= $2 ",
                "AND ended_at <= $3 ",
                "ORDER BY (ended_at - started_at) DESC, started_at ASC",
            ))
            .bind::<diesel::sql_types::Uuid, _>(user_id.into_inner())
            .bind::<diesel::sql_types::Timestamptz, _>(window_start)
            .bind::<diesel::sql_types::Timestamptz, _>(window_end);

            let rows = query
                .get_results::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        user_id: task.user_id().into_inner(),
        description: task.description().to_owned(),
        started_at: task.started_at(),
        ended_at: task.ended_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        user_id: UserId::from_uuid(row.user_id),
        description: row.description,
        started_at: row.started_at,
        ended_at: row.ended_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
