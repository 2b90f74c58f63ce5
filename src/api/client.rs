// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the adverse-news service.
//!
//! All calls go through one [`ApiClient`] built at startup. The service root
//! is resolved once from, in order: the `--api-url` flag, the
//! `ADVERSE_LENS_API_URL` environment variable, the `[api]` section of the
//! settings file, and finally a localhost default.

use crate::api::types::{PaginatedSearches, SearchResultResponse};
use crate::config::defaults::{API_PREFIX, DEFAULT_API_ROOT};
use crate::config::Config;
use crate::error::{Error, Result};
use serde::Serialize;

/// Environment variable overriding the service root URL.
pub const ENV_API_URL: &str = "ADVERSE_LENS_API_URL";

#[derive(Serialize)]
struct SubmitSearchBody<'a> {
    names: &'a str,
}

/// Thin wrapper over a shared [`reqwest::Client`] bound to one service root.
///
/// Cloning is cheap; async tasks clone the client into their futures.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given service root (without the API prefix).
    ///
    /// Trailing slashes on the root are ignored, so `http://host/` and
    /// `http://host` produce the same endpoint URLs.
    #[must_use]
    pub fn new(root: &str) -> Self {
        // Build client with explicit redirect policy and user agent
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("AdverseLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                eprintln!("HTTP client options rejected ({e}); continuing with defaults");
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: format!("{}{}", root.trim_end_matches('/'), API_PREFIX),
        }
    }

    /// Resolves the service root from flag, environment, and settings.
    #[must_use]
    pub fn resolve_root(flag: Option<&str>, config: &Config) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                return url;
            }
        }
        if let Some(url) = &config.api.base_url {
            if !url.is_empty() {
                return url.clone();
            }
        }
        DEFAULT_API_ROOT.to_string()
    }

    /// Full endpoint base, including the API prefix.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a new name-search and waits for its result set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the request fails or the response
    /// cannot be decoded.
    pub async fn submit_search(&self, names: &str) -> Result<SearchResultResponse> {
        let url = format!("{}/adversenews/searches", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&SubmitSearchBody { names })
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))
    }

    /// Fetches one page of past searches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the request fails or the response
    /// cannot be decoded.
    pub async fn list_searches(&self, page: u32, limit: u32) -> Result<PaginatedSearches> {
        let url = format!("{}/adversenews/searches", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))
    }

    /// Fetches the full result set of a previously run search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the request fails or the response
    /// cannot be decoded.
    pub async fn detail_by_id(&self, record_id: &str) -> Result<SearchResultResponse> {
        let url = format!("{}/adversenews/searches/{record_id}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Self::check_status(&response)?;
        response
            .json()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))
    }

    /// Downloads the raw bytes of a scanned article image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailed`] if the request fails or reports a
    /// non-success status.
    pub async fn image_binary(&self, image_id: &str) -> Result<Vec<u8>> {
        let url = format!("{}/images/{image_id}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Self::check_status(&response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::FetchFailed(format!(
                "API request failed: {} ({})",
                response.status(),
                response.url()
            )))
        }
    }
}
