use crate::models::{JobRecord, SearchQuery};
use crate::scrapers::types::SearchConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const HEADERS: [&str; 6] = ["Link", "Title", "Company", "Location", "Summary", "Salary"];

#[derive(Serialize)]
struct CsvRow<'a> {
    link: String,
    title: &'a str,
    company: &'a str,
    location: &'a str,
    summary: &'a str,
    salary: &'a str,
}

/// Write the header row and one row per job, returning the number of rows written
pub fn write_jobs<W: Write>(
    writer: W,
    config: &SearchConfig,
    query: &SearchQuery,
    jobs: &[JobRecord],
) -> Result<usize> {
    // header goes out by hand so an empty export still has one
    let mut wr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wr.write_record(HEADERS)
        .context("Failed to write CSV header")?;

    for job in jobs {
        let row = CsvRow {
            link: config.listing_link(query, &job.id)?.to_string(),
            title: &job.title,
            company: &job.company,
            location: &job.location,
            summary: &job.summary,
            salary: &job.salary,
        };
        wr.serialize(row)
            .with_context(|| format!("Failed to write CSV row for job {}", job.id))?;
    }

    wr.flush().context("Failed to flush CSV output")?;
    Ok(jobs.len())
}

/// Create (or truncate) `path` and export `jobs` into it
pub fn save_jobs(
    path: &Path,
    config: &SearchConfig,
    query: &SearchQuery,
    jobs: &[JobRecord],
) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_jobs(file, config, query, jobs)
}
