//! Timecard: personnel time-tracking service.
//!
//! This crate manages user identity records enriched from an external
//! passport lookup and records per-user work intervals reported as
//! aggregated effort over a date range.
//!
//! # Architecture
//!
//! Timecard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`directory`]: Enrichment-gated user identity records
//! - [`ledger`]: Work-interval tracking and effort reporting
//! - [`rest`]: Transport boundary over the two services
//! - [`config`]: Environment-driven runtime settings
//!
//! # Example
//!
//! ```
//! use mockable::DefaultClock;
//! use timecard::directory::domain::{PassportId, UserId};
//! use timecard::ledger::domain::Task;
//!
//! let clock = DefaultClock;
//! let passport = PassportId::parse("AB 123456").expect("valid passport");
//! assert_eq!(passport.series(), "AB");
//!
//! let mut task = Task::open(UserId::new(), "write report", &clock);
//! task.close(&clock).expect("open task closes");
//! assert!(task.effort().is_some());
//! ```

pub mod config;
pub mod directory;
pub mod ledger;
pub mod rest;
