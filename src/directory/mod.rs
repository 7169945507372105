//! User directory for timecard.
//!
//! This module manages personnel identity records. Creating a user is gated
//! on a successful enrichment lookup keyed by passport identifier: the
//! client never supplies identity fields at creation time. Updates replace
//! fields directly with no re-enrichment. The module follows hexagonal
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
