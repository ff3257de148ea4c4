//! Mock response source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, ResponseSource};

/// Mock implementation of the ResponseSource trait.
///
/// Tickets with a configured page return it, tickets with a configured
/// error fail with it, and unknown tickets fail with a 404 status.
#[derive(Debug, Default)]
pub struct MockResponseSource {
    /// Page markup by ticket.
    pages: Arc<RwLock<HashMap<String, String>>>,
    /// Errors by ticket, taken on first use.
    errors: Arc<RwLock<HashMap<String, FetchError>>>,
    /// Tickets fetched, in call order.
    fetched: Arc<RwLock<Vec<String>>>,
}

impl MockResponseSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `markup` for `ticket`.
    pub async fn set_page(&self, ticket: &str, markup: &str) {
        self.pages
            .write()
            .await
            .insert(ticket.to_string(), markup.to_string());
    }

    /// Fail the next fetch of `ticket` with `error`.
    pub async fn set_error(&self, ticket: &str, error: FetchError) {
        self.errors.write().await.insert(ticket.to_string(), error);
    }

    /// Tickets fetched so far, in call order.
    pub async fn fetched(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl ResponseSource for MockResponseSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, ticket: &str) -> Result<String, FetchError> {
        self.fetched.write().await.push(ticket.to_string());

        if let Some(error) = self.errors.write().await.remove(ticket) {
            return Err(error);
        }

        match self.pages.read().await.get(ticket) {
            Some(markup) => Ok(markup.clone()),
            None => Err(FetchError::Status { status: 404 }),
        }
    }
}
