//! Validated passport identifier type.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Passport identifier split into its series and number halves.
///
/// The wire form is `"SERIES NUMBER"`: exactly two non-empty tokens joined
/// by a single space. Leading, trailing, or doubled separators produce an
/// empty token and are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassportId {
    series: String,
    number: String,
}

impl PassportId {
    /// Parses a `"SERIES NUMBER"` passport identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidPassport`] when the value does not
    /// split into exactly two non-empty space-separated tokens.
    pub fn parse(raw: &str) -> Result<Self, UserDomainError> {
        let mut tokens = raw.split(' ');
        let series = tokens.next().unwrap_or_default();
        let number = tokens.next().unwrap_or_default();
        let has_more_tokens = tokens.next().is_some();

        if series.is_empty() || number.is_empty() || has_more_tokens {
            return Err(UserDomainError::InvalidPassport(raw.to_owned()));
        }

        Ok(Self {
            series: series.to_owned(),
            number: number.to_owned(),
        })
    }

    /// Returns the passport series.
    #[must_use]
    pub fn series(&self) -> &str {
        &self.series
    }

    /// Returns the passport number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for PassportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.series, self.number)
    }
}
