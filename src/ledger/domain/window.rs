//! Inclusive date window for effort reporting.

use super::{LedgerDomainError, Task};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Inclusive `[start, end]` window over task intervals.
///
/// A window whose start lies after its end is not rejected; it simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportWindow {
    /// Parses a window from two date-like strings.
    ///
    /// Each bound accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD`
    /// date, the latter meaning midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::InvalidDate`] when either bound fails
    /// to parse.
    pub fn parse(start: &str, end: &str) -> Result<Self, LedgerDomainError> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    /// Creates a window from already-resolved bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when the task is closed and lies entirely within the
    /// window: start at or after the lower bound, end at or before the
    /// upper bound. Open tasks never match.
    #[must_use]
    pub fn contains(&self, task: &Task) -> bool {
        task.ended_at()
            .is_some_and(|ended| task.started_at() >= self.start && ended <= self.end)
    }
}

/// Parses a single window bound.
fn parse_bound(raw: &str) -> Result<DateTime<Utc>, LedgerDomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
                .map_err(|_| LedgerDomainError::InvalidDate(raw.to_owned()))
        })
}
