//! Task ledger for timecard.
//!
//! This module records per-user work intervals: a task opens with a
//! server-assigned start time, closes with a server-assigned end time, and
//! closed intervals are reported as effort (end minus start) over an
//! inclusive date window, longest first. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
