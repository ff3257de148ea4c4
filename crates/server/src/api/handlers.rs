use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use locate_core::{parse_ticket_list, render_page};

use crate::metrics::encode_metrics;
use crate::state::AppState;

/// Query parameter carrying comma-separated ticket numbers
const TICKETS_PARAM: &str = "tickets";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Render positive responses for the requested tickets.
///
/// Always 200: upstream failures show up as "no data" cards. Query pairs are
/// taken raw so a repeated `tickets` key uses the first value instead of
/// rejecting the request.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let param = params
        .iter()
        .find(|(key, _)| key == TICKETS_PARAM)
        .map(|(_, value)| value.as_str());
    let tickets = parse_ticket_list(param);
    if !tickets.is_empty() {
        info!(count = tickets.len(), "Looking up tickets");
    }

    let results = state.lookup().lookup_all(&tickets).await;
    Html(render_page(&results))
}

/// Prometheus text exposition
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
