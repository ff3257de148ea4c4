//! NC811 response display client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::metrics::{UPSTREAM_FETCHES_TOTAL, UPSTREAM_FETCH_DURATION};

use super::{FetchError, ResponseSource};

/// Fetches ticket response pages from the NC811 web display.
pub struct Nc811Client {
    client: Client,
    config: UpstreamConfig,
}

impl Nc811Client {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the page URL for a ticket. The ticket is inserted as given.
    pub fn ticket_url(&self, ticket: &str) -> String {
        format!(
            "{}?{}={}",
            self.config.base_url, self.config.ticket_param, ticket
        )
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })
    }
}

fn map_send_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::ConnectionFailed(e.to_string())
    } else if e.is_builder() {
        FetchError::InvalidUrl(e.to_string())
    } else {
        FetchError::Http(e)
    }
}

#[async_trait]
impl ResponseSource for Nc811Client {
    fn name(&self) -> &str {
        "nc811"
    }

    async fn fetch(&self, ticket: &str) -> Result<String, FetchError> {
        let url = self.ticket_url(ticket);
        debug!(ticket = ticket, url = %url, "Fetching NC811 responses");

        let start = Instant::now();
        let result = self.fetch_page(&url).await;
        let elapsed = start.elapsed();

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        UPSTREAM_FETCHES_TOTAL.with_label_values(&[outcome]).inc();
        UPSTREAM_FETCH_DURATION
            .with_label_values(&[outcome])
            .observe(elapsed.as_secs_f64());

        if let Ok(body) = &result {
            debug!(
                ticket = ticket,
                bytes = body.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "NC811 fetch complete"
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn config_for(server: &MockServer, timeout_secs: u64) -> UpstreamConfig {
        UpstreamConfig {
            base_url: server.url("/newtinweb/responsedisplay.nas"),
            ticket_param: "ticket".to_string(),
            timeout_secs,
        }
    }

    #[test]
    fn test_ticket_url_uses_defaults() {
        let client = Nc811Client::new(UpstreamConfig::default()).unwrap();
        assert_eq!(
            client.ticket_url("123456789"),
            "https://newtina.nc811.org/newtinweb/responsedisplay.nas?ticket=123456789"
        );
    }

    #[test]
    fn test_ticket_url_is_not_escaped() {
        let client = Nc811Client::new(UpstreamConfig::default()).unwrap();
        assert!(client.ticket_url("12&x=1").ends_with("?ticket=12&x=1"));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/newtinweb/responsedisplay.nas")
                    .query_param("ticket", "123456789");
                then.status(200).body("<table></table>");
            })
            .await;

        let client = Nc811Client::new(config_for(&server, 5)).unwrap();
        let body = client.fetch("123456789").await.unwrap();

        assert_eq!(body, "<table></table>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/newtinweb/responsedisplay.nas");
                then.status(500).body("Internal Server Error");
            })
            .await;

        let client = Nc811Client::new(config_for(&server, 5)).unwrap();
        let err = client.fetch("1").await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/newtinweb/responsedisplay.nas");
                then.status(200)
                    .body("<table></table>")
                    .delay(Duration::from_secs(3));
            })
            .await;

        let client = Nc811Client::new(config_for(&server, 1)).unwrap();
        let err = client.fetch("1").await.unwrap_err();

        assert!(matches!(err, FetchError::Timeout), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:1/display".to_string(),
            ticket_param: "ticket".to_string(),
            timeout_secs: 2,
        };
        let client = Nc811Client::new(config).unwrap();
        let err = client.fetch("1").await.unwrap_err();

        assert!(matches!(err, FetchError::ConnectionFailed(_)), "got {:?}", err);
    }
}
