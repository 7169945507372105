//! Enrichment port: the external identity lookup keyed by passport.

use crate::directory::domain::{EnrichedProfile, PassportId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for enrichment lookups.
pub type EnrichmentResult = Result<EnrichedProfile, EnrichmentError>;

/// External identity lookup contract.
///
/// Implementations resolve a passport series/number pair to the identity
/// fields trusted at user-creation time. Errors are surfaced to the caller
/// with their cause attached; the port performs no retries and no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentGateway: Send + Sync {
    /// Looks up the identity profile for the given passport.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError`] on any non-success upstream status,
    /// transport failure, or malformed response body.
    async fn lookup(&self, passport: &PassportId) -> EnrichmentResult;
}

/// Errors returned by enrichment gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum EnrichmentError {
    /// The enrichment endpoint answered with a non-success status.
    #[error("enrichment endpoint returned status {0}")]
    UpstreamStatus(u16),

    /// The lookup request could not be completed.
    #[error("enrichment request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not decode as a profile document.
    #[error("malformed enrichment response: {0}")]
    MalformedBody(Arc<dyn std::error::Error + Send + Sync>),
}

impl EnrichmentError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a body-decoding failure.
    pub fn malformed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::MalformedBody(Arc::new(err))
    }
}
