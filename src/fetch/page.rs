// src/fetch/page.rs
// =============================================================================
// Fetches one web page over HTTP(S).
//
// Steps:
// 1. Validate the URL (the `url` crate rejects garbage before we touch the net)
// 2. Build a reqwest client with our timeout and user agent
// 3. GET the page; anything but 200 OK is a failure
// 4. Return the body as text (reqwest handles the charset)
// =============================================================================

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::info;
use url::Url;

use crate::error::FetchError;

// Settings for the HTTP request, filled in from the command line
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Fetches a page and returns its HTML
//
// Parameters:
//   url: the page to download
//   config: timeout and user agent
//
// Returns: the response body, or a FetchError describing what went wrong
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;

    info!(url = %parsed, "fetching page");
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }

    let html = response.text().await?;
    info!(bytes = html.len(), "page fetched");
    Ok(html)
}
