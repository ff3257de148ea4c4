//! Upstream fetch of the NC811 response display page.
//!
//! `ResponseSource` is the seam between ticket lookup and the network. The
//! production implementation is `Nc811Client`; tests substitute
//! `testing::MockResponseSource`.

mod nc811;

pub use nc811::Nc811Client;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a ticket's response page.
///
/// Ticket lookup collapses all of these into an empty result, but they are
/// kept distinct for logging and metrics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timeout")]
    Timeout,

    /// Could not connect to the upstream host.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned HTTP {status}")]
    Status { status: u16 },

    /// The ticket produced a URL reqwest refuses to send.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Any other transport or body error.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout => "timeout",
            FetchError::ConnectionFailed(_) => "connection_failed",
            FetchError::Status { .. } => "status",
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Http(_) => "http",
        }
    }
}

/// Source of raw response page markup for a ticket.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch the raw page markup for one ticket. Exactly one attempt.
    async fn fetch(&self, ticket: &str) -> Result<String, FetchError>;
}
