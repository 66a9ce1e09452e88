use crate::models::JobRecord;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use scraper::Html;

/// Downloads one results page and hands back its HTML body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`; any transport failure or non-2xx status is an error
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Site markup knowledge: where the count lives and how a listing card looks.
/// Swapping this out is all it takes to point the scraper at another board.
pub trait ListingMarkup: Send + Sync {
    /// Total number of results advertised on the first page, 0 if unreadable
    fn result_count(&self, document: &Html) -> usize;

    /// Every listing card on one results page
    fn listings(&self, document: &Html) -> Vec<JobRecord>;

    /// Get the name of the job board
    fn source_name(&self) -> &'static str;
}
