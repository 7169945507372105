//! Identity profile returned by the enrichment capability.

use serde::{Deserialize, Serialize};

/// Identity fields sourced from an enrichment lookup.
///
/// Every field may be empty: the enrichment contract guarantees strings,
/// not content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProfile {
    /// Family name.
    pub surname: String,
    /// Given name.
    pub given_name: String,
    /// Patronymic, where applicable.
    pub patronymic: String,
    /// Postal address.
    pub address: String,
}

impl EnrichedProfile {
    /// Creates a profile from its four identity fields.
    #[must_use]
    pub fn new(
        surname: impl Into<String>,
        given_name: impl Into<String>,
        patronymic: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            given_name: given_name.into(),
            patronymic: patronymic.into(),
            address: address.into(),
        }
    }
}
