//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Upstream NC811 fetches (outcome, latency)
//! - Ticket lookups and extracted response rows

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Upstream Metrics
// =============================================================================

/// Upstream fetches by outcome.
pub static UPSTREAM_FETCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "locate_upstream_fetches_total",
            "Total NC811 response page fetches",
        ),
        &["outcome"], // "success", "timeout", "connection_failed", "status", ...
    )
    .unwrap()
});

/// Upstream fetch duration in seconds.
pub static UPSTREAM_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "locate_upstream_fetch_duration_seconds",
            "NC811 response page fetch duration in seconds",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["outcome"],
    )
    .unwrap()
});

// =============================================================================
// Lookup Metrics
// =============================================================================

/// Tickets looked up.
pub static TICKET_LOOKUPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "locate_ticket_lookups_total",
        "Total ticket lookups since startup",
    )
    .unwrap()
});

/// Lookups that ended with no rows (fetch failure, no table, invalid ticket).
pub static TICKET_LOOKUPS_EMPTY: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "locate_ticket_lookups_empty_total",
        "Ticket lookups that produced no response rows",
    )
    .unwrap()
});

/// Extracted response rows by category.
pub static RESPONSE_ROWS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "locate_response_rows_total",
            "Positive response rows extracted, by category",
        ),
        &["category"],
    )
    .unwrap()
});

/// All core metrics, for registration with the server's registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(UPSTREAM_FETCHES_TOTAL.clone()),
        Box::new(UPSTREAM_FETCH_DURATION.clone()),
        Box::new(TICKET_LOOKUPS_TOTAL.clone()),
        Box::new(TICKET_LOOKUPS_EMPTY.clone()),
        Box::new(RESPONSE_ROWS_TOTAL.clone()),
    ]
}
