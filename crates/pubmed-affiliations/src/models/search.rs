//! ESearch response model.

use serde::{Deserialize, Serialize};

/// Body of an `esearch.fcgi` call with `retmode=json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResponse {
    /// Search result payload.
    #[serde(default)]
    pub esearchresult: ESearchResult,
}

/// Search result payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResult {
    /// Total hits reported by the service (as a string on the wire).
    #[serde(default)]
    pub count: Option<String>,

    /// Returned identifiers, in relevance order.
    #[serde(default)]
    pub idlist: Vec<String>,
}

impl ESearchResponse {
    /// Consume the response, returning its identifiers.
    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.esearchresult.idlist
    }

    /// Total hit count, if the service reported a numeric one.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.esearchresult.count.as_deref()?.parse().ok()
    }
}
