use serde::Serialize;
use std::fmt;

/// One job listing extracted from a results page
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct JobRecord {
    /// Site-assigned listing key, empty when the card carries none
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub summary: String,
    pub salary: String,
}

/// The search term as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse every whitespace run to one space and trim both ends
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
