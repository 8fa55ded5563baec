//! Error types for the search pipeline.
//!
//! [`FetchError`] and [`ExtractError`] describe expected upstream trouble and
//! are recovered inside the pipeline. Only [`SearchError`] ever reaches a caller.

/// Failure to obtain markup from the upstream search endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete before the client timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with anything other than 200.
    #[error("unexpected status: {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            // the url carries the query, which is only logged at debug level
            FetchError::Transport(e.without_url().to_string())
        }
    }
}

/// Failure to turn markup into a usable result set.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The document parsed but yielded fewer results than the quality floor.
    #[error("only {found} usable results found")]
    Insufficient { found: usize },

    /// The document could not be read as search results at all.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Hard failure surfaced to the rendering layer.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The outbound HTTP client could not be set up.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Any other internal fault.
    #[error("internal error: {0}")]
    Internal(String),
}
