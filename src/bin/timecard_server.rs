//! HTTP entry point for the timecard service.
//!
//! Wires environment configuration, the `PostgreSQL` repositories, the
//! HTTP enrichment gateway, and the REST routes, then serves until the
//! process is stopped. Database migrations are applied out of band with
//! the diesel CLI against the `migrations/` directory.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tracing::info;

use timecard::config::AppConfig;
use timecard::directory::adapters::http::HttpEnrichmentGateway;
use timecard::directory::adapters::postgres::PostgresUserRepository;
use timecard::directory::services::UserDirectoryService;
use timecard::ledger::adapters::postgres::PostgresTaskRepository;
use timecard::ledger::services::TaskLedgerService;
use timecard::rest::{AppState, routes};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    setup_tracing();

    let config = AppConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool = Pool::builder().build(manager)?;

    let http_client = reqwest::Client::builder()
        .timeout(config.enrichment.timeout)
        .build()?;
    let enrichment = HttpEnrichmentGateway::new(http_client, config.enrichment.endpoint.clone());

    let directory = UserDirectoryService::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(enrichment),
        Arc::new(DefaultClock),
    );
    let ledger = TaskLedgerService::new(
        Arc::new(PostgresTaskRepository::new(pool)),
        Arc::new(DefaultClock),
        config.open_task_policy,
    );

    let app = routes::router(Arc::new(AppState::new(directory, ledger)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "timecard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Installs the fmt subscriber, honouring `RUST_LOG` when set.
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
