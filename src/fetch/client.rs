//! HTTP client implementation
//!
//! Builds the one client used for a run and performs single GET requests,
//! classifying failures into [`FetchError`] variants. A non-200 status is
//! not an error; it is reported as [`FetchOutcome::NotFound`].
//!
//! Plain bodies are decoded by reqwest using the charset declared in the
//! Content-Type (UTF-8 when absent). Gzip bodies are unpacked first and must
//! then be UTF-8.

use crate::config::FetchConfig;
use crate::fetch::decode::{gunzip_text, is_gzip};
use crate::{FetchError, FetchResult};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Result of a completed request
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered 200 OK
    Found {
        /// The requested URL
        url: String,
        /// Decoded body text
        text: String,
    },

    /// Any status other than 200
    NotFound {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status_code: u16,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use mapboy::config::FetchConfig;
/// use mapboy::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(10).min(config.timeout()))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL
///
/// There are no retries: a failure here is final for this URL and the caller
/// decides how to degrade.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchOutcome)` - The server responded (200 or otherwise)
/// * `Err(FetchError)` - Timeout, transport failure or undecodable gzip body
pub async fn fetch_resource(client: &Client, url: &str) -> FetchResult<FetchOutcome> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Ok(FetchOutcome::NotFound {
            url: url.to_string(),
            status_code: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let text = if is_gzip(url, &content_type) {
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, e))?;
        gunzip_text(url, &body)?
    } else {
        response.text().await.map_err(|e| classify_error(url, e))?
    };

    Ok(FetchOutcome::Found {
        url: url.to_string(),
        text,
    })
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
