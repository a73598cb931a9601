//! Command-line interface definitions for gazelle_scrape.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default matching the Gazelle archive, so a bare
//! invocation produces the standard snapshot.

use clap::Parser;

/// Command-line arguments for the archive scraper.
///
/// # Examples
///
/// ```sh
/// # Standard snapshot into ./gazelle_projects.csv
/// gazelle_scrape
///
/// # Custom output path and a gentler request cadence
/// gazelle_scrape -o /tmp/projects.csv --delay-ms 2500
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the site to crawl
    #[arg(long, env = "GAZELLE_BASE_URL", default_value = "https://www.thegazelle.org")]
    pub base_url: String,

    /// Path of the CSV output file
    #[arg(short, long, default_value = "gazelle_projects.csv")]
    pub output: String,

    /// Delay between issue-page requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(&["gazelle_scrape"]);

        assert_eq!(cli.base_url, "https://www.thegazelle.org");
        assert_eq!(cli.output, "gazelle_projects.csv");
        assert_eq!(cli.delay_ms, 1000);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(&[
            "gazelle_scrape",
            "--base-url",
            "http://127.0.0.1:8080",
            "-o",
            "/tmp/projects.csv",
            "--delay-ms",
            "0",
        ]);

        assert_eq!(cli.base_url, "http://127.0.0.1:8080");
        assert_eq!(cli.output, "/tmp/projects.csv");
        assert_eq!(cli.delay_ms, 0);
    }
}
