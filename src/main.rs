mod export;
mod models;
mod scrapers;

use anyhow::Result;
use clap::Parser;
use models::SearchQuery;
use scrapers::types::{SearchConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_PAGE_SIZE};
use scrapers::{HttpFetcher, IndeedMarkup, JobScraper};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Scrape every Indeed listing for a search term into a CSV file
#[derive(Debug, Parser)]
#[command(name = "job-scout", version)]
struct Cli {
    /// Search term, e.g. an industry, job title or company name
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Job search endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let Some(term) = cli.query else {
        println!("please input industry, job and company name");
        return Ok(());
    };

    let config = SearchConfig {
        base_url: cli.base_url,
        page_size: DEFAULT_PAGE_SIZE,
        output: cli.output,
    };
    let query = SearchQuery::new(term);

    let scraper = JobScraper::new(
        Arc::new(HttpFetcher::new()?),
        Arc::new(IndeedMarkup::new()?),
        config,
    );

    let report = scraper.scrape(&query).await?;

    info!("writing to csv...");
    let config = scraper.config();
    let rows = export::save_jobs(&config.output, config, &report.query, &report.records)?;
    info!(
        "💾 Saved {} of {} reported jobs ({} pages) to {}",
        rows,
        report.total_count,
        report.pages,
        config.output.display()
    );

    println!("Done in {:.2}s", report.elapsed_secs());

    Ok(())
}
