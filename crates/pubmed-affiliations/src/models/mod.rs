//! Data models for PubMed search results and report records.

mod record;
mod search;

pub use record::{FieldValue, NOT_COMPUTED, PaperRecord};
pub use search::{ESearchResponse, ESearchResult};
