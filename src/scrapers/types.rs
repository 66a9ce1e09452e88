use crate::models::SearchQuery;
use anyhow::{Context, Result};
use reqwest::Url;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://kr.indeed.com/jobs";
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_OUTPUT: &str = "jobs.csv";

/// Search parameters for a scrape run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Job search endpoint, e.g. `https://kr.indeed.com/jobs`
    pub base_url: String,
    /// Listings per results page; also the stride between page offsets
    pub page_size: usize,
    /// Where the CSV export is written
    pub output: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl SearchConfig {
    /// First results page, used to read the total count
    pub fn count_url(&self, query: &SearchQuery) -> Result<Url> {
        self.build_url(&[("q", query.as_str())])
    }

    /// Results page starting at `offset`
    pub fn page_url(&self, query: &SearchQuery, offset: usize) -> Result<Url> {
        let limit = self.page_size.to_string();
        let start = offset.to_string();
        self.build_url(&[("q", query.as_str()), ("limit", &limit), ("start", &start)])
    }

    /// Direct link to a single listing, rebuilt from its id
    pub fn listing_link(&self, query: &SearchQuery, id: &str) -> Result<Url> {
        self.build_url(&[("q", query.as_str()), ("vjk", id)])
    }

    fn build_url(&self, params: &[(&str, &str)]) -> Result<Url> {
        Url::parse_with_params(&self.base_url, params)
            .with_context(|| format!("Invalid base URL: {}", self.base_url))
    }
}
