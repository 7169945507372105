//! Environment-driven runtime configuration.

use crate::ledger::services::OpenTaskPolicy;
use std::env;
use std::time::Duration;
use thiserror::Error;

const BIND_ADDR_VAR: &str = "TIMECARD_BIND_ADDR";
const DATABASE_URL_VAR: &str = "TIMECARD_DATABASE_URL";
const ENRICHMENT_URL_VAR: &str = "TIMECARD_ENRICHMENT_URL";
const ENRICHMENT_TIMEOUT_VAR: &str = "TIMECARD_ENRICHMENT_TIMEOUT_SECS";
const OPEN_TASK_POLICY_VAR: &str = "TIMECARD_OPEN_TASK_POLICY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidVar {
        /// The offending variable name.
        var: &'static str,
        /// The raw value found.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Settings for the outbound enrichment lookup.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Full enrichment endpoint URL (series/number arrive as query params).
    pub endpoint: String,
    /// Bound on each lookup request.
    pub timeout: Duration,
}

/// Runtime settings for the timecard service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Enrichment lookup settings.
    pub enrichment: EnrichmentConfig,
    /// How many open intervals a user may hold at once.
    pub open_task_policy: OpenTaskPolicy,
}

impl AppConfig {
    /// Reads the configuration from `TIMECARD_*` environment variables.
    ///
    /// `TIMECARD_DATABASE_URL` and `TIMECARD_ENRICHMENT_URL` are required;
    /// the bind address, enrichment timeout, and open-task policy fall
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingVar(DATABASE_URL_VAR))?;
        let endpoint =
            env::var(ENRICHMENT_URL_VAR).map_err(|_| ConfigError::MissingVar(ENRICHMENT_URL_VAR))?;

        let timeout = match env::var(ENRICHMENT_TIMEOUT_VAR) {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_ENRICHMENT_TIMEOUT_SECS),
        };
        let open_task_policy = match env::var(OPEN_TASK_POLICY_VAR) {
            Ok(raw) => parse_policy(&raw)?,
            Err(_) => OpenTaskPolicy::default(),
        };

        Ok(Self {
            bind_addr,
            database_url,
            enrichment: EnrichmentConfig { endpoint, timeout },
            open_task_policy,
        })
    }
}

/// Parses the enrichment timeout in whole seconds.
fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|err| ConfigError::InvalidVar {
            var: ENRICHMENT_TIMEOUT_VAR,
            value: raw.to_owned(),
            reason: err.to_string(),
        })
}

/// Parses the open-task policy name.
fn parse_policy(raw: &str) -> Result<OpenTaskPolicy, ConfigError> {
    match raw {
        "unrestricted" => Ok(OpenTaskPolicy::Unrestricted),
        "single_open" => Ok(OpenTaskPolicy::SingleOpen),
        _ => Err(ConfigError::InvalidVar {
            var: OPEN_TASK_POLICY_VAR,
            value: raw.to_owned(),
            reason: "expected 'unrestricted' or 'single_open'".to_owned(),
        }),
    }
}
