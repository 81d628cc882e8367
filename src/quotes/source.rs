//! Quote Source
//!
//! One blocking-style call to the upstream quote provider. No caching and
//! no retries happen here.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// A single failed upstream attempt.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Transport failure, including timeouts
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON object
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body parsed but carried no usable content
    #[error("response has no quote content")]
    EmptyContent,
}

/// Anything that can produce one quote per call.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<String, QuoteError>> + Send;
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

/// Turns an upstream body into display text.
///
/// Yields `"content - author"`, or bare content when the author is blank.
pub fn parse_quote(body: &str) -> Result<String, QuoteError> {
    let payload: QuotePayload = serde_json::from_str(body)?;

    let content = payload.content.as_deref().map(str::trim).unwrap_or("");
    if content.is_empty() {
        return Err(QuoteError::EmptyContent);
    }

    match payload.author.as_deref().map(str::trim) {
        Some(author) if !author.is_empty() => Ok(format!("{} - {}", content, author)),
        _ => Ok(content.to_string()),
    }
}

// == HTTP Quote Source ==
/// Fetches quotes over HTTP with a fixed whole-request timeout.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    /// Builds a source for `url`. Fails only if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> Result<String, QuoteError> {
        debug!(url = %self.url, "requesting upstream quote");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_quote(&body)
    }
}
