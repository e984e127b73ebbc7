//! Report assembly: search, fetch each paper, extract, build records.

use crate::client::PubMedClient;
use crate::error::{ClientResult, ReportResult};
use crate::extract::extract_non_academic_authors;
use crate::models::PaperRecord;

/// Source of identifiers and detail text.
///
/// Implemented by [`PubMedClient`]; tests plug in in-memory sources.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Identifiers matching `query`, in result order.
    async fn search_ids(&self, query: &str) -> ClientResult<Vec<String>>;

    /// Raw detail text, or `None` if the paper is unavailable.
    async fn fetch_details(&self, pubmed_id: &str) -> ClientResult<Option<String>>;
}

#[async_trait::async_trait]
impl PaperSource for PubMedClient {
    async fn search_ids(&self, query: &str) -> ClientResult<Vec<String>> {
        Self::search_ids(self, query).await
    }

    async fn fetch_details(&self, pubmed_id: &str) -> ClientResult<Option<String>> {
        Self::fetch_details(self, pubmed_id).await
    }
}

/// Build the affiliation report for `query`.
///
/// Papers are processed one at a time in search order. A paper whose detail
/// is unavailable, or which has no flagged author, produces no record.
///
/// # Errors
///
/// Search failures abort the run. Detail failures of any kind only drop the paper.
pub async fn build_report<S>(source: &S, query: &str) -> ReportResult<Vec<PaperRecord>>
where
    S: PaperSource + ?Sized,
{
    let ids = source.search_ids(query).await?;
    tracing::info!(query, count = ids.len(), "Found papers");

    let mut records = Vec::new();

    for id in &ids {
        let details = source.fetch_details(id).await.unwrap_or_else(|err| {
            tracing::debug!(pubmed_id = %id, error = %err, "Detail fetch failed");
            None
        });

        let Some(text) = details else {
            tracing::debug!(pubmed_id = %id, "Skipping paper without details");
            continue;
        };

        let authors = extract_non_academic_authors(&text);
        match PaperRecord::new(id.as_str(), &authors) {
            Some(record) => {
                tracing::debug!(pubmed_id = %id, authors = authors.len(), "Flagged paper");
                records.push(record);
            }
            None => tracing::debug!(pubmed_id = %id, "No non-academic authors"),
        }
    }

    tracing::info!(records = records.len(), "Report assembled");
    Ok(records)
}
