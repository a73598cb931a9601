//! Gazelle archive scraper.
//!
//! Scrapes [The Gazelle](https://www.thegazelle.org) archive. The archive
//! listing enumerates issues as `<h1>` headings reading "Issue <n>"; each
//! issue lives at `/issue/<n>` and lists its projects as styled `<div>`
//! blocks containing a title heading, a description paragraph, and a link.
//!
//! The structural markers are the Tailwind class lists of the site's listing
//! template, so the selectors below are long but fixed. Colons inside class
//! names (`md:gap-2` and friends) are backslash-escaped for the CSS parser.
//!
//! # Extraction policy
//!
//! - Listing headings that do not begin with "Issue" are skipped silently;
//!   the identifier is the heading's trailing whitespace-delimited token with
//!   no further validation.
//! - Project blocks missing a title or description are skipped silently.
//! - A project block that has both but no usable link is treated as a
//!   malformed document: the whole issue parses to an error, and the caller
//!   counts that issue as zero records.

use crate::error::{Result, ScrapeError};
use crate::fetch::fetch_page;
use crate::models::{IssueRef, ProjectRecord};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

static ISSUE_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.font-normal.text-2xl.mt-1").expect("valid selector"));

static PROJECT_CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.flex.flex-col.flex-wrap.w-full.gap-3.md\\:gap-2.hover\\:cursor-pointer")
        .expect("valid selector")
});

static PROJECT_TITLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "h1.text-2xl.sm\\:text-3xl.md\\:text-xl.font-semibold.capitalize.font-lora.leading-snug",
    )
    .expect("valid selector")
});

static PROJECT_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p.text-base.md\\:text-sm.font-light.text-gray-600").expect("valid selector")
});

static PROJECT_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Parse the archive listing page into issue references, in document order.
///
/// Headings matching the listing marker whose text begins with "Issue"
/// contribute one [`IssueRef`] each; the issue number is the heading's last
/// whitespace-delimited token and the issue URL is `{base_url}/issue/{n}`.
/// No matches yields an empty vector, never an error.
pub fn parse_issue_refs(html: &str, base_url: &str) -> Vec<IssueRef> {
    let document = Html::parse_document(html);
    let base = base_url.trim_end_matches('/');

    let mut issues = Vec::new();
    for heading in document.select(&ISSUE_HEADING) {
        let text = heading.text().collect::<String>();
        if !text.starts_with("Issue") {
            debug!(heading = %text, "Skipping non-issue heading");
            continue;
        }
        if let Some(number) = text.split_whitespace().last() {
            issues.push(IssueRef {
                number: number.to_string(),
                url: format!("{base}/issue/{number}"),
            });
        }
    }
    issues
}

/// Parse one issue page into project records, in document order.
///
/// Each project container with both a title and a description yields one
/// [`ProjectRecord`]; the record URL is the container's first `a[href]`
/// joined against `base`. Containers missing title or description are
/// dropped. A container with text but no usable link fails the whole page
/// with [`ScrapeError::Parse`] so no partial record is ever emitted.
pub fn parse_projects(html: &str, issue_number: &str, base: &Url) -> Result<Vec<ProjectRecord>> {
    let document = Html::parse_document(html);

    let mut records = Vec::new();
    for container in document.select(&PROJECT_CONTAINER) {
        let Some(title) = container.select(&PROJECT_TITLE).next() else {
            continue;
        };
        let Some(description) = container.select(&PROJECT_DESCRIPTION).next() else {
            continue;
        };

        let href = container
            .select(&PROJECT_LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| {
                ScrapeError::Parse(format!("project block in issue {issue_number} has no link"))
            })?;
        let url = base.join(href).map_err(|e| {
            ScrapeError::Parse(format!("unjoinable project link {href:?}: {e}"))
        })?;

        records.push(ProjectRecord {
            issue_number: issue_number.to_string(),
            title: title.text().collect::<String>(),
            description: description.text().collect::<String>(),
            url: url.to_string(),
        });
    }
    Ok(records)
}

/// Fetch the archive listing and index its issues.
///
/// This is the one fetch whose failure dooms the run: without the listing
/// there is nothing to crawl, so the error propagates to the orchestrator.
#[instrument(level = "info", skip_all, fields(%base_url))]
pub async fn index_issues(base_url: &str) -> Result<Vec<IssueRef>> {
    let listing_url = format!("{}/archives", base_url.trim_end_matches('/'));
    let html = fetch_page(&listing_url).await?;
    let issues = parse_issue_refs(&html, base_url);
    info!(count = issues.len(), url = %listing_url, "Indexed archive issues");
    Ok(issues)
}

/// Fetch one issue page and extract its project records.
#[instrument(level = "info", skip_all, fields(issue = %issue.number))]
pub async fn scrape_issue(issue: &IssueRef, base: &Url) -> Result<Vec<ProjectRecord>> {
    let html = fetch_page(&issue.url).await?;
    let records = parse_projects(&html, &issue.number, base)?;
    info!(count = records.len(), "Extracted project records");
    Ok(records)
}
