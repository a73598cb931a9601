//! Data models for the archive crawl.
//!
//! Two records flow through the pipeline:
//! - [`IssueRef`]: a pointer to one issue page, discovered on the archive listing
//! - [`ProjectRecord`]: one project entry extracted from an issue page
//!
//! `ProjectRecord` is serde-derived because the CSV writer serializes it
//! directly; its field order is the column order of the output file.

use serde::{Deserialize, Serialize};

/// A reference to a single issue discovered on the archive listing page.
///
/// Produced by the listing parser and consumed once by the scrape loop;
/// never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// The issue identifier, e.g. `"42"` for the heading "Issue 42".
    pub number: String,
    /// The absolute URL of the issue page.
    pub url: String,
}

/// One project entry extracted from an issue page.
///
/// All fields are required: a project block missing any of them is dropped
/// by the detail parser rather than emitted partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// The issue this project was listed under.
    pub issue_number: String,
    /// The project title.
    pub title: String,
    /// The short project description.
    pub description: String,
    /// The absolute URL of the project's detail page.
    pub url: String,
}
