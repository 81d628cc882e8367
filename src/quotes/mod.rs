//! Quotes Module
//!
//! The upstream quote client, its local fallbacks, and the caching proxy
//! that combines them.

mod fallback;
mod proxy;
mod source;

pub use fallback::{fallback_quote, random_fallback, FALLBACK_QUOTES};
pub use proxy::{FetchOutcome, QuoteProxy, LAST_QUOTE_KEY};
pub use source::{parse_quote, HttpQuoteSource, QuoteError, QuoteSource};
