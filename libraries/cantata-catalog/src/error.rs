//! Error types for the catalog client.

use thiserror::Error;

/// Errors from catalog lookups and track-source operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog service returned an error response
    #[error("catalog error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse a catalog response
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Invalid base or resource URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Operation needs a config field that was not provided
    #[error("not configured: {0}")]
    NotConfigured(&'static str),

    /// The search matched nothing at all
    #[error("no results for the query")]
    NoResults,

    /// The search cursor walked past the last match
    #[error("search cursor exhausted the result list")]
    CursorExhausted,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
