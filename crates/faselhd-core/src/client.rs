//! HTTP client for FaselHD
//!
//! Thin wrapper over `reqwest` that resolves relative paths against the
//! configured site base and turns non-success statuses into errors.
//! Session cookies set by the site are kept for later requests.
//! Requests are issued once; there is no retry or throttling layer.

use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{FaselError, Result};
use crate::url::{MAIN_URL, absolutize};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE_VALUE: &str = "ar,en;q=0.8";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root every relative link is resolved against (default: [`MAIN_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MAIN_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different site root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client wrapper for FaselHD pages
pub struct FaselClient {
    client: reqwest::Client,
    base_url: String,
}

impl FaselClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an absolute http(s) URL
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if absolutize(&base_url, &base_url).is_none() {
            return Err(FaselError::InvalidUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(FaselError::HttpError)?;

        Ok(Self { client, base_url })
    }

    /// Site root relative links are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch HTML content from an absolute URL or a site-relative path
    ///
    /// # Arguments
    /// * `url` - Absolute URL, or a path such as `/movies?page=1`
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `InvalidUrl` if `url` is empty or does not resolve
    /// - `HttpStatus` if the server answers with a non-success status
    /// - `HttpError` for network errors
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = absolutize(url, &self.base_url)
            .ok_or_else(|| FaselError::InvalidUrl(url.to_string()))?;

        debug!(%url, "Fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FaselError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FaselError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(FaselError::HttpError)
    }
}
