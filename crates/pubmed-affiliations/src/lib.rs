//! PubMed Affiliation Report
//!
//! Searches PubMed for a query, fetches each matching paper, and flags authors
//! whose affiliation line looks commercial (pharma, biotech, corp, ...).
//!
//! # Pipeline
//!
//! 1. **Search**: one `esearch` call, capped at 10 identifiers
//! 2. **Fetch**: one `efetch` call per identifier, body kept as raw text
//! 3. **Extract**: line-oriented keyword + `<Author>` tag scan
//! 4. **Emit**: CSV file or console
//!
//! # Example
//!
//! ```no_run
//! use pubmed_affiliations::{client::PubMedClient, config::Config, report::build_report};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env()?)?;
//!     let records = build_report(&client, "cancer trial").await?;
//!     println!("{} flagged papers", records.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod report;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, ReportError};
pub use models::{FieldValue, PaperRecord};
pub use report::{PaperSource, build_report};
