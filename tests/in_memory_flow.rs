//! Behavioural integration tests driving both services end to end over the
//! in-memory adapters.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use timecard::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{EnrichedProfile, PassportId},
    ports::{EnrichmentGateway, EnrichmentResult},
    services::{CreateUserRequest, DirectoryError, UserDirectoryService},
};
use timecard::ledger::{
    adapters::memory::InMemoryTaskRepository,
    services::{OpenTaskPolicy, StartTaskRequest, TaskLedgerService},
};
use tokio::runtime::Runtime;

/// Gateway answering every lookup with the same profile.
struct StaticProfileGateway(EnrichedProfile);

#[async_trait]
impl EnrichmentGateway for StaticProfileGateway {
    async fn lookup(&self, _passport: &PassportId) -> EnrichmentResult {
        Ok(self.0.clone())
    }
}

/// Gateway refusing every lookup with an upstream 500.
struct UnavailableGateway;

#[async_trait]
impl EnrichmentGateway for UnavailableGateway {
    async fn lookup(&self, _passport: &PassportId) -> EnrichmentResult {
        Err(timecard::directory::ports::EnrichmentError::UpstreamStatus(
            500,
        ))
    }
}

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

type Directory<E> = UserDirectoryService<InMemoryUserRepository, E, DefaultClock>;
type Ledger = TaskLedgerService<InMemoryTaskRepository, DefaultClock>;

fn directory_with<E: EnrichmentGateway>(gateway: E) -> Directory<E> {
    UserDirectoryService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(gateway),
        Arc::new(DefaultClock),
    )
}

fn ledger() -> Ledger {
    TaskLedgerService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
        OpenTaskPolicy::Unrestricted,
    )
}

/// Full scenario: enrichment-backed creation, two tracked intervals, an
/// effort report, and user deletion leaving the intervals orphaned.
#[test]
fn track_and_report_efforts_for_an_enriched_user() {
    let rt = test_runtime();
    let directory = directory_with(StaticProfileGateway(EnrichedProfile::new(
        "Ivanov",
        "Ivan",
        "Ivanovich",
        "Moscow",
    )));
    let tasks = ledger();

    rt.block_on(async {
        let user = directory
            .create(CreateUserRequest::new("AB 123456"))
            .await
            .expect("user creation should succeed");
        assert_eq!(user.surname(), "Ivanov");
        assert_eq!(user.address(), "Moscow");

        let first = tasks
            .start_task(StartTaskRequest::new(user.id(), "morning standup"))
            .await
            .expect("first start should succeed");
        let second = tasks
            .start_task(StartTaskRequest::new(user.id(), "code review"))
            .await
            .expect("second start should succeed");

        tasks
            .stop_task(first.id())
            .await
            .expect("first stop should succeed");
        tasks
            .stop_task(second.id())
            .await
            .expect("second stop should succeed");

        let report = tasks
            .user_efforts(user.id(), "2000-01-01", "2100-01-01")
            .await
            .expect("report should succeed");
        assert_eq!(report.len(), 2);
        assert!(report.iter().all(|task| task.effort().is_some()));

        // Deleting the user does not cascade: intervals stay reportable.
        directory
            .delete(user.id())
            .await
            .expect("deletion should succeed");
        let listed = directory.list().await.expect("listing should succeed");
        assert!(listed.is_empty());

        let orphaned = tasks
            .user_efforts(user.id(), "2000-01-01", "2100-01-01")
            .await
            .expect("report should still succeed");
        assert_eq!(orphaned.len(), 2);
    });
}

/// A failing enrichment lookup aborts creation before anything persists.
#[test]
fn failed_enrichment_leaves_the_directory_empty() {
    let rt = test_runtime();
    let directory = directory_with(UnavailableGateway);

    rt.block_on(async {
        let result = directory.create(CreateUserRequest::new("AB 123456")).await;
        assert!(matches!(result, Err(DirectoryError::Enrichment(_))));

        let listed = directory.list().await.expect("listing should succeed");
        assert!(listed.is_empty());
    });
}
