//! Report record model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rendering of a field that has not been computed.
pub const NOT_COMPUTED: &str = "Unknown";

/// A report column that may not have been computed yet.
///
/// `NotComputed` is distinct from `Value(String::new())`: an empty value was
/// looked up and found blank, `NotComputed` was never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    /// Not yet computed; renders as `Unknown`.
    #[default]
    NotComputed,
    /// Computed value.
    Value(String),
}

impl FieldValue {
    /// Wrap a computed value.
    #[must_use]
    pub fn value(s: impl Into<String>) -> Self {
        Self::Value(s.into())
    }

    /// Returns true if this field was never computed.
    #[must_use]
    pub const fn is_not_computed(&self) -> bool {
        matches!(self, Self::NotComputed)
    }

    /// Text written to reports.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotComputed => NOT_COMPUTED,
            Self::Value(v) => v,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == NOT_COMPUTED { Ok(Self::NotComputed) } else { Ok(Self::Value(s)) }
    }
}

/// One row of the affiliation report.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed identifier.
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Paper title.
    #[serde(rename = "Title")]
    pub title: FieldValue,

    /// Publication date.
    #[serde(rename = "Publication Date")]
    pub publication_date: FieldValue,

    /// Flagged author names, joined with `", "`.
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Company names.
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: FieldValue,

    /// Corresponding author email.
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: FieldValue,
}

impl PaperRecord {
    /// CSV header, in column order.
    pub const COLUMNS: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];

    /// Build a record for a paper with flagged authors.
    ///
    /// Returns `None` when `authors` is empty: a paper without flagged authors has no record.
    #[must_use]
    pub fn new(pubmed_id: impl Into<String>, authors: &[String]) -> Option<Self> {
        if authors.is_empty() {
            return None;
        }

        Some(Self {
            pubmed_id: pubmed_id.into(),
            title: FieldValue::NotComputed,
            publication_date: FieldValue::NotComputed,
            non_academic_authors: authors.join(", "),
            company_affiliations: FieldValue::NotComputed,
            corresponding_author_email: FieldValue::NotComputed,
        })
    }

    /// Column values in CSV order.
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        [
            &self.pubmed_id,
            self.title.as_str(),
            self.publication_date.as_str(),
            &self.non_academic_authors,
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }
}
