//! Error taxonomy for the scrape pipeline.
//!
//! Three failure classes exist: network (transport or non-2xx status),
//! parse (a document without the structure we expect), and output I/O.
//! None of them crash the process; callers log at the boundary where the
//! error occurred and decide whether the run degrades or aborts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected document structure: {0}")]
    Parse(String),

    #[error("output I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
