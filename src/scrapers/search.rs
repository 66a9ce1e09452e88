use crate::models::{JobRecord, SearchQuery};
use crate::scrapers::traits::{ListingMarkup, PageFetcher};
use crate::scrapers::types::SearchConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use scraper::Html;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Outcome of a full scrape run
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub query: SearchQuery,
    pub total_count: usize,
    pub pages: usize,
    pub records: Vec<JobRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScrapeReport {
    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Page offsets `0, stride, 2 * stride, ...` covering `[0, total)`
pub fn page_offsets(total: usize, stride: usize) -> Vec<usize> {
    if stride == 0 {
        return Vec::new();
    }
    (0..total).step_by(stride).collect()
}

/// Paginated job search: count, fan out one task per page, merge
pub struct JobScraper {
    fetcher: Arc<dyn PageFetcher>,
    markup: Arc<dyn ListingMarkup>,
    config: SearchConfig,
}

impl JobScraper {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        markup: Arc<dyn ListingMarkup>,
        config: SearchConfig,
    ) -> Self {
        Self {
            fetcher,
            markup,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Total number of listings the site reports for `query`
    pub async fn resolve_count(&self, query: &SearchQuery) -> Result<usize> {
        let url = self.config.count_url(query)?;
        let html = self.fetcher.fetch(&url).await?;

        let document = Html::parse_document(&html);
        let count = self.markup.result_count(&document);
        if count == 0 {
            warn!(
                "No result count found on {} page for [{}]",
                self.markup.source_name(),
                query
            );
        }

        Ok(count)
    }

    /// Every listing in `[0, total)`, one concurrent task per page.
    ///
    /// Each task owns its page's records; they are merged here as tasks finish,
    /// so the order follows completion, not page position. The first failing
    /// page ends the run and the remaining tasks are aborted with the set.
    pub async fn collect_all(&self, query: &SearchQuery, total: usize) -> Result<Vec<JobRecord>> {
        let mut tasks = JoinSet::new();

        for offset in page_offsets(total, self.config.page_size) {
            let fetcher = Arc::clone(&self.fetcher);
            let markup = Arc::clone(&self.markup);
            let config = self.config.clone();
            let query = query.clone();

            tasks.spawn(async move {
                fetch_page(fetcher.as_ref(), markup.as_ref(), &config, &query, offset).await
            });
        }

        let mut jobs = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let page = joined.context("Page task failed to complete")??;
            jobs.extend(page);
        }

        Ok(jobs)
    }

    /// Count, collect and time a full search
    pub async fn scrape(&self, query: &SearchQuery) -> Result<ScrapeReport> {
        let started_at = Utc::now();
        info!("search [{}] on {}...", query, self.markup.source_name());

        let total_count = self.resolve_count(query).await?;
        info!("total jobs: {}", total_count);

        let pages = page_offsets(total_count, self.config.page_size).len();
        info!("finding jobs across {} pages...", pages);
        let records = self.collect_all(query, total_count).await?;
        info!("collected {} jobs", records.len());

        Ok(ScrapeReport {
            query: query.clone(),
            total_count,
            pages,
            records,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

/// Listings on the single results page starting at `offset`
pub async fn fetch_page(
    fetcher: &dyn PageFetcher,
    markup: &dyn ListingMarkup,
    config: &SearchConfig,
    query: &SearchQuery,
    offset: usize,
) -> Result<Vec<JobRecord>> {
    let url = config.page_url(query, offset)?;
    info!("Get job : {}", url);

    let html = fetcher.fetch(&url).await?;

    // Html is !Send, keep it out of any await
    let jobs = {
        let document = Html::parse_document(&html);
        markup.listings(&document)
    };
    debug!("{} jobs on page at offset {}", jobs.len(), offset);

    Ok(jobs)
}
