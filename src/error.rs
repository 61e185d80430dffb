use std::time::Duration;

use thiserror::Error;

/// Errors raised while fetching a page from docs.rs.
///
/// Extractors never produce errors of their own: a page that doesn't match any
/// known shape yields empty collections and `None` fields instead. Anything
/// that reaches the caller therefore comes from the network.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response arrived within the fetch budget. The request was dropped.
    #[error("docs.rs request timed out after {}ms: {url}", .after.as_millis())]
    Timeout { url: String, after: Duration },

    /// docs.rs answered with a non-success status.
    #[error("docs.rs http error: {status} ({url})")]
    Upstream { status: u16, url: String },

    /// The connection failed before any response was received.
    #[error("docs.rs request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl FetchError {
    /// Status code carried by an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}
