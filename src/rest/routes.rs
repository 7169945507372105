//! Route wiring for the timecard REST surface.

use std::sync::Arc;

use axum::Extension;
use axum::Router;
use axum::routing::{get, post, put};
use mockable::Clock;

use crate::directory::ports::{EnrichmentGateway, UserRepository};
use crate::ledger::ports::TaskRepository;
use crate::rest::{AppState, handlers};

/// Builds the application router over the given handler state.
#[must_use]
pub fn router<R, E, C, T>(state: Arc<AppState<R, E, C, T>>) -> Router
where
    R: UserRepository + 'static,
    E: EnrichmentGateway + 'static,
    C: Clock + Send + Sync + 'static,
    T: TaskRepository + 'static,
{
    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R, E, C, T>).post(handlers::create_user::<R, E, C, T>),
        )
        .route(
            "/users/{id}",
            put(handlers::update_user::<R, E, C, T>)
                .delete(handlers::delete_user::<R, E, C, T>),
        )
        .route("/users/{id}/start", post(handlers::start_task::<R, E, C, T>))
        .route("/users/{id}/stop", post(handlers::stop_task::<R, E, C, T>))
        .route(
            "/users/{id}/efforts",
            get(handlers::user_efforts::<R, E, C, T>),
        )
        .layer(Extension(state))
}
