//! Common test utilities for in-process router tests.
//!
//! The fixture builds the real router with a `MockResponseSource` in place of
//! the NC811 client, so tests control every upstream page.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use locate_core::{testing::MockResponseSource, Config, TicketLookup};
use locate_server::{api::create_router, state::AppState};

/// A response page with a header row and three responses.
pub const RESPONSE_PAGE: &str = r#"<html><body>
<table>
  <tr><th>Member</th><th>Description</th><th>Response</th><th>Op ID</th></tr>
  <tr><td>CLT01</td><td>City of Charlotte Water</td><td>20 - Marked</td><td>WEB</td></tr>
  <tr><td>DPC02</td><td>Duke Energy Carolinas</td><td>60 - Locate Incomplete</td><td>LOC14</td></tr>
  <tr><td>SPX05</td><td>Spectrum</td><td>Clear?</td><td>OP9</td></tr>
</table>
</body></html>"#;

/// Test fixture with a mock upstream.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock upstream - configure pages and failures per ticket
    pub source: Arc<MockResponseSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestFixture {
    pub fn new() -> Self {
        let source = Arc::new(MockResponseSource::new());
        let lookup = TicketLookup::new(Arc::clone(&source) as Arc<dyn locate_core::ResponseSource>);
        let state = Arc::new(AppState::new(Config::default(), lookup));
        let router = create_router(state);

        Self { router, source }
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}
