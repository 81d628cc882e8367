//! Quote Proxy
//!
//! Cache-aside, bounded retries and local fallback in front of a
//! `QuoteSource`.

use tracing::{debug, info, warn};

use super::fallback::random_fallback;
use super::source::{QuoteError, QuoteSource};
use crate::cache::{SharedCache, QUOTES_REGION};

/// Fixed key of the cached quote inside its region.
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// Result of one retry sequence against the source.
#[derive(Debug)]
pub enum FetchOutcome {
    /// An attempt succeeded (1-based attempt number)
    Fetched { quote: String, attempt: u32 },
    /// Every attempt failed
    Exhausted { attempts: u32, last_error: QuoteError },
}

// == Quote Proxy ==
/// Serves the quote of the moment without ever failing.
///
/// On a cache miss the source is tried up to `retry_count` times in a row.
/// If every attempt fails a local fallback is used instead. Either result is
/// cached under the store's regular TTL.
#[derive(Debug)]
pub struct QuoteProxy<S> {
    source: S,
    cache: SharedCache,
    retry_count: u32,
}

impl<S: QuoteSource> QuoteProxy<S> {
    /// A `retry_count` of zero is raised to one attempt.
    pub fn new(source: S, cache: SharedCache, retry_count: u32) -> Self {
        Self {
            source,
            cache,
            retry_count: retry_count.max(1),
        }
    }

    // == Get Quote ==
    pub async fn get_quote(&self) -> String {
        if let Some(quote) = self.cache.get::<String>(QUOTES_REGION, LAST_QUOTE_KEY).await {
            return quote;
        }

        let quote = match self.fetch_with_retry().await {
            FetchOutcome::Fetched { quote, attempt } => {
                debug!(attempt, "upstream quote fetched");
                quote
            }
            FetchOutcome::Exhausted { attempts, last_error } => {
                warn!(attempts, error = %last_error, "upstream quote unavailable, using local fallback");
                random_fallback().to_string()
            }
        };

        self.cache.put(QUOTES_REGION, LAST_QUOTE_KEY, &quote).await;
        quote
    }

    // == Fetch With Retry ==
    /// Calls the source up to `retry_count` times, stopping at the first success.
    pub async fn fetch_with_retry(&self) -> FetchOutcome {
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.source.fetch().await {
                Ok(quote) => return FetchOutcome::Fetched { quote, attempt },
                Err(err) if attempt >= self.retry_count => {
                    return FetchOutcome::Exhausted {
                        attempts: attempt,
                        last_error: err,
                    };
                }
                Err(err) => {
                    info!(attempt, max = self.retry_count, error = %err, "quote attempt failed, retrying");
                }
            }
        }
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }
}
