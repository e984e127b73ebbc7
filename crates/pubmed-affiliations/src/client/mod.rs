//! PubMed E-utilities client.
//!
//! Two calls, both plain GETs:
//! - `esearch` for the identifier list (JSON)
//! - `efetch` for one paper's detail body (kept as raw text)

mod middleware;

pub use middleware::RequestTracing;

use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::ESearchResponse;

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Search endpoint URL.
    esearch_url: String,

    /// Detail endpoint URL.
    efetch_url: String,

    /// Result cap passed as `retmax`.
    max_results: u32,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder().gzip(true).build()?;

        let client = ClientBuilder::new(client).with(RequestTracing).build();

        Ok(Self {
            client,
            esearch_url: config.esearch_url,
            efetch_url: config.efetch_url,
            max_results: config.max_results,
        })
    }

    /// Result cap used for searches.
    #[must_use]
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Search PubMed and return matching identifiers in response order.
    ///
    /// # Errors
    ///
    /// Any non-2xx status, transport failure or malformed body.
    pub async fn search_ids(&self, query: &str) -> ClientResult<Vec<String>> {
        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), self.max_results.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];

        let response = self.client.get(&self.esearch_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        let parsed: ESearchResponse = serde_json::from_str(&body)?;

        tracing::debug!(query, total = ?parsed.total(), "Search completed");

        Ok(parsed.into_ids())
    }

    /// Fetch the raw detail body for one identifier.
    ///
    /// Returns `Ok(None)` for any status other than 200, and for transport
    /// failures (connection reset, DNS, truncated body). A failed detail fetch
    /// drops that paper; it never aborts the run.
    ///
    /// # Errors
    ///
    /// None in practice; the `Result` matches [`crate::report::PaperSource`].
    pub async fn fetch_details(&self, pubmed_id: &str) -> ClientResult<Option<String>> {
        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("id".to_string(), pubmed_id.to_string()),
            ("retmode".to_string(), api::DETAIL_RETMODE.to_string()),
        ];

        let response = match self.client.get(&self.efetch_url).query(&params).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(pubmed_id, error = %err, "Detail fetch failed");
                return Ok(None);
            }
        };

        if response.status() != StatusCode::OK {
            tracing::debug!(
                pubmed_id,
                status = response.status().as_u16(),
                "Detail fetch returned no body"
            );
            return Ok(None);
        }

        match response.text().await {
            Ok(body) => Ok(Some(body)),
            Err(err) => {
                tracing::debug!(pubmed_id, error = %err, "Detail body could not be read");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("esearch_url", &self.esearch_url)
            .field("efetch_url", &self.efetch_url)
            .field("max_results", &self.max_results)
            .finish()
    }
}
