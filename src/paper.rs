//! Paper records: the read-only input of every chart and summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PaperTrailError, Result};

/// Length of generated paper identifiers (hex characters).
const ID_LEN: usize = 12;

/// ISO calendar date format used at the JSON and CLI boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged paper.
///
/// Field names match the persisted `papers.json` array. Only `title`,
/// `authors`, `date_read` and `tags` feed the charts; the rest is metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default = "generate_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub date_read: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub arxiv_id: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

impl Paper {
    #[must_use]
    pub fn new(title: impl Into<String>, date_read: NaiveDate) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            authors: Vec::new(),
            url: None,
            date_read,
            tags: Vec::new(),
            notes: None,
            rating: None,
            source: None,
            arxiv_id: None,
            doi: None,
        }
    }

    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Check whether the paper carries `tag`, ignoring ASCII case.
    #[must_use]
    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over title, authors, notes and tags.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let haystack = [
            self.title.as_str(),
            &self.authors.join(" "),
            self.notes.as_deref().unwrap_or(""),
            &self.tags.join(" "),
        ]
        .join(" ")
        .to_lowercase();
        haystack.contains(&needle)
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
/// Returns `InvalidDate` if the string is not a valid ISO calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        PaperTrailError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Split a comma-separated CLI list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn generate_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(ID_LEN);
    id
}

#[cfg(test)]
#[path = "paper_tests.rs"]
mod tests;
