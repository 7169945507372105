//! `PostgreSQL` repository implementation for user directory storage.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::directory::{
    domain::{PassportId, PersistedUserData, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: DirectoryPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let passport = user.passport().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            // This pre-check improves semantic error reporting but is not
            // relied on for correctness: the unique index still enforces
            // integrity in the TOCTOU window between check and insert.
            let duplicate = find_user_by_passport(connection, &passport)?;
            if duplicate.is_some() {
                return Err(UserRepositoryError::DuplicatePassport(passport.clone()));
            }

            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_passport_unique_violation(info.as_ref()) =>
                    {
                        UserRepositoryError::DuplicatePassport(passport.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUser(user_id)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;

            Ok(())
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let passport = user.passport().clone();
        let changeset = to_changeset(user);

        self.run_blocking(move |connection| {
            let affected = diesel::update(users::table.filter(users::id.eq(user_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_passport_unique_violation(info.as_ref()) =>
                    {
                        UserRepositoryError::DuplicatePassport(passport.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;

            if affected == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(users::table.filter(users::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;

            if affected == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order(users::created_at.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        passport: user.passport().to_string(),
        surname: user.surname().to_owned(),
        given_name: user.given_name().to_owned(),
        patronymic: user.patronymic().to_owned(),
        address: user.address().to_owned(),
        created_at: user.created_at(),
        updated_at: user.updated_at(),
    }
}

fn to_changeset(user: &User) -> UserChangeset {
    UserChangeset {
        passport: user.passport().to_string(),
        surname: user.surname().to_owned(),
        given_name: user.given_name().to_owned(),
        patronymic: user.patronymic().to_owned(),
        address: user.address().to_owned(),
        updated_at: user.updated_at(),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let passport =
        PassportId::parse(&row.passport).map_err(UserRepositoryError::persistence)?;

    let data = PersistedUserData {
        id: UserId::from_uuid(row.id),
        passport,
        surname: row.surname,
        given_name: row.given_name,
        patronymic: row.patronymic,
        address: row.address,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(User::from_persisted(data))
}

fn is_passport_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_users_passport_unique")
}

fn find_user_by_passport(
    connection: &mut PgConnection,
    passport: &PassportId,
) -> UserRepositoryResult<Option<UserRow>> {
    users::table
        .filter(users::passport.eq(passport.to_string()))
        .select(UserRow::as_select())
        .first::<UserRow>(connection)
        .optional()
        .map_err(UserRepositoryError::persistence)
}
