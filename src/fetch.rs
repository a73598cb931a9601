//! HTTP page fetching.
//!
//! One GET per call, body returned as text. A non-2xx status is as much a
//! failure as a refused connection; both surface as [`ScrapeError::Network`]
//! so callers can apply a single degrade-or-abort policy.

use crate::error::{Result, ScrapeError};
use tracing::{debug, instrument};

/// Fetch a page and return its body text.
///
/// # Errors
///
/// Returns [`ScrapeError::Network`] on transport failure or a non-2xx
/// status code.
#[instrument(level = "debug")]
pub async fn fetch_page(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/archives");
            then.status(200).body("<html><h1>Issue 42</h1></html>");
        });

        let body = fetch_page(&server.url("/archives")).await.unwrap();

        mock.assert();
        assert_eq!(body, "<html><h1>Issue 42</h1></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_non_2xx_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/issue/404");
            then.status(404);
        });

        let err = fetch_page(&server.url("/issue/404")).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused_is_network_error() {
        // Port 9 (discard) is a safe bet for a refused connection.
        let err = fetch_page("http://127.0.0.1:9/archives").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Network(_)));
    }
}
