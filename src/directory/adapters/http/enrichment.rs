//! Reqwest-backed enrichment gateway.

use crate::directory::{
    domain::{EnrichedProfile, PassportId},
    ports::{EnrichmentError, EnrichmentGateway, EnrichmentResult},
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{Instrument, Level, debug};

/// Enrichment gateway calling
/// `GET <endpoint>?passportSerie=<S>&passportNumber=<N>`.
///
/// Request timeouts are the caller's concern: configure them on the
/// injected [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpEnrichmentGateway {
    client: reqwest::Client,
    endpoint: String,
}

/// Wire shape of the enrichment response body.
///
/// Fields the upstream omits decode as empty strings, matching the
/// "strings, possibly empty" contract.
#[derive(Debug, Deserialize)]
struct ProfilePayload {
    #[serde(default)]
    surname: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    patronymic: String,
    #[serde(default)]
    address: String,
}

impl From<ProfilePayload> for EnrichedProfile {
    fn from(payload: ProfilePayload) -> Self {
        Self {
            surname: payload.surname,
            given_name: payload.name,
            patronymic: payload.patronymic,
            address: payload.address,
        }
    }
}

impl HttpEnrichmentGateway {
    /// Creates a gateway for the given enrichment endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EnrichmentGateway for HttpEnrichmentGateway {
    async fn lookup(&self, passport: &PassportId) -> EnrichmentResult {
        let span = tracing::span!(
            Level::INFO, "enrichment_lookup",
            http.url = %self.endpoint,
            otel.kind = "client",
        );

        let request = self.client.get(&self.endpoint).query(&[
            ("passportSerie", passport.series()),
            ("passportNumber", passport.number()),
        ]);

        async {
            let response = request.send().await.map_err(EnrichmentError::transport)?;

            let status = response.status();
            if !status.is_success() {
                return Err(EnrichmentError::UpstreamStatus(status.as_u16()));
            }

            let payload = response
                .json::<ProfilePayload>()
                .await
                .map_err(EnrichmentError::malformed)?;
            debug!("enrichment lookup succeeded");
            Ok(payload.into())
        }
        .instrument(span)
        .await
    }
}
