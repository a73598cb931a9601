//! # Gazelle Scrape
//!
//! A small crawler that snapshots the project catalog of
//! [The Gazelle](https://www.thegazelle.org) into a CSV file.
//!
//! ## Usage
//!
//! ```sh
//! gazelle_scrape -o gazelle_projects.csv
//! ```
//!
//! ## Architecture
//!
//! The application is a sequential pipeline:
//! 1. **Indexing**: fetch the archive listing and discover issue pages
//! 2. **Scraping**: fetch each issue page in order and extract project records,
//!    pausing between requests out of politeness
//! 3. **Output**: write the accumulated records to a CSV snapshot
//!
//! Per-issue failures degrade to zero records for that issue; only a failed
//! listing fetch aborts the run, since there is nothing to crawl without it.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;

use cli::Cli;
use error::ScrapeError;
use models::ProjectRecord;
use scrapers::gazelle;

/// Run one full crawl: index the archive, scrape every issue, write the CSV.
///
/// Owns the only mutable state of a run, the accumulating record set. The
/// two empty-result terminations ("no issues", "no project data") return
/// `Ok` with no output file; a listing failure propagates as `Err`.
#[instrument(skip_all, fields(base_url = %args.base_url))]
async fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let base = Url::parse(&args.base_url)
        .map_err(|e| ScrapeError::Parse(format!("invalid base URL {:?}: {e}", args.base_url)))?;

    let issues = gazelle::index_issues(&args.base_url).await?;
    if issues.is_empty() {
        warn!("No issues found. Exiting.");
        return Ok(());
    }

    let mut projects: Vec<ProjectRecord> = Vec::new();
    for issue in &issues {
        info!(url = %issue.url, "Scraping issue page");
        match gazelle::scrape_issue(issue, &base).await {
            Ok(records) => projects.extend(records),
            Err(e) => {
                error!(issue = %issue.number, error = %e, "Issue scrape failed; contributing zero records");
            }
        }
        sleep(Duration::from_millis(args.delay_ms)).await;
    }

    if projects.is_empty() {
        warn!("No project data found.");
        return Ok(());
    }

    info!(count = projects.len(), path = %args.output, "Writing CSV snapshot");
    if let Err(e) = outputs::csv::write_projects(&projects, &args.output) {
        error!(path = %args.output, error = %e, "Failed to write CSV output");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("gazelle_scrape starting up");

    let args = Cli::parse();

    let result = run(&args).await;
    if let Err(ref e) = result {
        error!(error = %e, "Run aborted");
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");

    result
}
