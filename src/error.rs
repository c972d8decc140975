//! Error types shared across the navigator.
//!
//! None of these are fatal to the running page: navigation errors leave the
//! state untouched, fetch errors degrade to empty content.

use thiserror::Error;

/// Rejected navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Identifier is not in the page registry.
    #[error("unknown page: {0:?}")]
    UnknownPage(String),
    /// Link text that does not name any registered page.
    #[error("link label does not name a page: {0:?}")]
    MalformedLinkLabel(String),
}

/// Failure talking to the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("client error: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("catalog answered with status {0}")]
    Status(u16),
    #[error("malformed catalog payload: {0}")]
    Decode(String),
}
