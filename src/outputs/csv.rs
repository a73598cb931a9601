//! CSV output for the accumulated project records.
//!
//! One file per run, overwritten in place. The header row
//! `issue_number,title,description,url` comes from the serde field names of
//! [`ProjectRecord`], and field values containing commas, quotes, or line
//! breaks get standard CSV quoting from the `csv` crate.

use crate::error::Result;
use crate::models::ProjectRecord;
use tracing::{info, instrument};

/// Write the full record set to a CSV file at `path`.
///
/// Truncates any existing file. The flush is explicit so an output error
/// surfaces here rather than in a drop handler the caller never sees.
///
/// # Errors
///
/// Fails with an I/O error if the file cannot be created, or a CSV error
/// if a record cannot be serialized.
#[instrument(level = "info", skip_all, fields(path = %path, count = records.len()))]
pub fn write_projects(records: &[ProjectRecord], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Data saved to CSV");
    Ok(())
}
