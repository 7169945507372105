//! Unit tests for the task ledger module.


use crate::directory::domain::UserId;
use crate::ledger::domain::Task;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a preset instant for deterministic timestamps.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shorthand for a UTC timestamp with second precision.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 15, hour, minute, 0).unwrap()
}

/// Builds a closed interval spanning the given instants.
fn closed_task(user_id: UserId, started: DateTime<Utc>, ended: DateTime<Utc>) -> Task {
    let mut task = Task::open(user_id, "work", &FixedClock(started));
    task.close(&FixedClock(ended)).expect("open task closes");
    task
}
