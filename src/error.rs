// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure: connect, TLS, timeout, body read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url}: server returned status {status}")]
    Status { url: String, status: u16 },

    /// The page loaded but carries no table with the marker class.
    #[error("no table with class \"{0}\" on the page")]
    MissingTable(String),

    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
