//! Configuration for the PubMed affiliation report.

/// E-utilities endpoint constants.
pub mod api {
    /// Base URL for NCBI E-utilities.
    pub const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Search endpoint (returns PMIDs).
    pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// Summary endpoint. Configured but never queried.
    pub const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

    /// Detail endpoint (full record export).
    pub const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

    /// Entrez database name.
    pub const DATABASE: &str = "pubmed";

    /// Fixed cap on search results.
    pub const MAX_RESULTS: u32 = 10;

    /// Export format requested from efetch. The body is scanned as plain text regardless.
    pub const DETAIL_RETMODE: &str = "xml";

    /// Environment variable overriding [`EUTILS_BASE`].
    pub const BASE_URL_ENV: &str = "PUBMED_EUTILS_URL";
}

/// Commercial affiliation heuristics.
pub mod keywords {
    /// Lowercase substrings marking a line as a commercial affiliation.
    pub const COMMERCIAL: &[&str] = &["pharma", "biotech", "inc", "corp", "gmbh", "s.a.", "llc"];
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search endpoint URL.
    pub esearch_url: String,

    /// Summary endpoint URL (unused by the pipeline).
    pub esummary_url: String,

    /// Detail endpoint URL.
    pub efetch_url: String,

    /// Maximum identifiers requested from search.
    pub max_results: u32,
}

impl Config {
    /// Configuration pointing at the public NCBI service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            esearch_url: api::ESEARCH_URL.to_string(),
            esummary_url: api::ESUMMARY_URL.to_string(),
            efetch_url: api::EFETCH_URL.to_string(),
            max_results: api::MAX_RESULTS,
        }
    }

    /// Configuration with every endpoint rooted at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            esearch_url: format!("{base}/esearch.fcgi"),
            esummary_url: format!("{base}/esummary.fcgi"),
            efetch_url: format!("{base}/efetch.fcgi"),
            max_results: api::MAX_RESULTS,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self::with_base_url(&format!("{base_url}/entrez/eutils"))
    }

    /// Create configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then honours `PUBMED_EUTILS_URL`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        match std::env::var(api::BASE_URL_ENV) {
            Ok(base) if base.trim().is_empty() => {
                anyhow::bail!("{} is set but empty", api::BASE_URL_ENV)
            }
            Ok(base) => Ok(Self::with_base_url(base.trim())),
            Err(_) => Ok(Self::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.esearch_url, api::ESEARCH_URL);
        assert_eq!(config.efetch_url, api::EFETCH_URL);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = Config::with_base_url("http://localhost:9999/eutils/");
        assert_eq!(config.esearch_url, "http://localhost:9999/eutils/esearch.fcgi");
        assert_eq!(config.esummary_url, "http://localhost:9999/eutils/esummary.fcgi");
        assert_eq!(config.efetch_url, "http://localhost:9999/eutils/efetch.fcgi");
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for kw in keywords::COMMERCIAL {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }
}
