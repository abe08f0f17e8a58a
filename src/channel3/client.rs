//! Channel3 Upstream Client
//!
//! Builds and sends the HTTP requests backing each tool invocation. Every
//! request carries the session's API key and a JSON content type; no
//! retries, caching, or local timeouts are applied.

use super::models::{BrandsInput, SearchInput};
use crate::router::auth::ApiKey;
use reqwest::{header::CONTENT_TYPE, StatusCode, Url};
use thiserror::Error;

/// Fixed origin of the Channel3 API (overridable via `CHANNEL3_API_BASE`)
pub const DEFAULT_API_BASE: &str = "https://api.trychannel3.com/v0";

/// Header carrying the caller's API key to the upstream API
pub const API_KEY_HEADER: &str = "x-api-key";

/// Outcome of an upstream call, separating "upstream said no" from
/// "we couldn't reach upstream". Both surface as tool-level error
/// envelopes, never as transport faults.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status
    #[error("upstream returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// Network failure, or a 2xx body that was not valid JSON
    #[error("upstream request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest keeps the interesting part (DNS failure, connection
        // refused, ...) in the source chain; flatten it into the message.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        UpstreamError::Transport(message)
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Transport(format!("invalid JSON from upstream: {err}"))
    }
}

/// HTTP client for the Channel3 product-search API.
///
/// Holds no credentials: the per-session [`ApiKey`] is passed into every
/// call so that concurrent sessions share one connection pool without
/// sharing authentication state.
#[derive(Debug, Clone)]
pub struct Channel3Client {
    http: reqwest::Client,
    api_base: String,
}

impl Channel3Client {
    /// Creates a client for the given API base URL (e.g. `.../v0`)
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint: POST /search
    pub async fn search(
        &self,
        key: &ApiKey,
        input: &SearchInput,
    ) -> Result<String, UpstreamError> {
        let url = self.endpoint(&["search"])?;
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;
        Self::read_json_body(response).await
    }

    /// Endpoint: GET /products/{product_id}
    pub async fn product_detail(
        &self,
        key: &ApiKey,
        product_id: &str,
    ) -> Result<String, UpstreamError> {
        let url = self.endpoint(&["products", product_id])?;
        self.get_json(key, url).await
    }

    /// Endpoint: GET /brands?query=&page=&size=
    ///
    /// Parameters absent from `input` are omitted from the query string
    /// entirely; pagination defaults are left to upstream.
    pub async fn brands(
        &self,
        key: &ApiKey,
        input: &BrandsInput,
    ) -> Result<String, UpstreamError> {
        let mut url = self.endpoint(&["brands"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = &input.query {
                pairs.append_pair("query", query);
            }
            if let Some(page) = input.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(size) = input.size {
                pairs.append_pair("size", &size.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        self.get_json(key, url).await
    }

    /// Endpoint: GET /brands/{brand_id}
    pub async fn brand_detail(
        &self,
        key: &ApiKey,
        brand_id: &str,
    ) -> Result<String, UpstreamError> {
        let url = self.endpoint(&["brands", brand_id])?;
        self.get_json(key, url).await
    }

    /// Builds an endpoint URL, percent-escaping each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| UpstreamError::Transport(format!("invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| UpstreamError::Transport("API base URL cannot have segments".into()))?
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, key: &ApiKey, url: Url) -> Result<String, UpstreamError> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::read_json_body(response).await
    }

    /// Maps an upstream response to the tool result text.
    ///
    /// A 2xx body is parsed as JSON and re-serialized compactly; anything
    /// else becomes [`UpstreamError::Rejected`] carrying the status and the
    /// body text (or the status reason phrase when the body is empty).
    async fn read_json_body(response: reqwest::Response) -> Result<String, UpstreamError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body
            };
            return Err(UpstreamError::Rejected { status, body });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(serde_json::to_string(&value)?)
    }
}
