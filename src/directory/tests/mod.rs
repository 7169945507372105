//! Unit tests for the user directory module.

mod domain_tests;

use chrono::{DateTime, Local, Utc};
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
