//! Ticket lookup: parse the requested ticket list, fetch and extract each
//! ticket in order, and collect the results.

mod result_set;

pub use result_set::ResultSet;

use std::sync::Arc;
use tracing::{debug, warn};

use crate::fetcher::ResponseSource;
use crate::metrics::{RESPONSE_ROWS_TOTAL, TICKET_LOOKUPS_EMPTY, TICKET_LOOKUPS_TOTAL};
use crate::response::{extract_rows, TicketResult};

/// Split a comma-separated ticket list, trimming tokens and dropping empties.
///
/// Duplicates are kept; they collapse later when inserted into a `ResultSet`.
pub fn parse_ticket_list(param: Option<&str>) -> Vec<String> {
    param
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Looks up positive responses for tickets through a `ResponseSource`.
#[derive(Clone)]
pub struct TicketLookup {
    source: Arc<dyn ResponseSource>,
}

impl TicketLookup {
    pub fn new(source: Arc<dyn ResponseSource>) -> Self {
        Self { source }
    }

    /// Fetch and extract one ticket.
    ///
    /// Fetch failures are logged and yield an empty result, the same as a
    /// page without a response table.
    pub async fn lookup_ticket(&self, ticket: &str) -> TicketResult {
        TICKET_LOOKUPS_TOTAL.inc();

        let rows = match self.source.fetch(ticket).await {
            Ok(markup) => extract_rows(&markup),
            Err(e) => {
                warn!(
                    ticket = ticket,
                    source = self.source.name(),
                    kind = e.kind(),
                    error = %e,
                    "Failed to fetch ticket responses"
                );
                Vec::new()
            }
        };

        if rows.is_empty() {
            TICKET_LOOKUPS_EMPTY.inc();
        }
        for row in &rows {
            RESPONSE_ROWS_TOTAL
                .with_label_values(&[row.category.as_str()])
                .inc();
        }
        debug!(ticket = ticket, rows = rows.len(), "Ticket lookup complete");

        rows
    }

    /// Look up every ticket sequentially, in request order.
    pub async fn lookup_all(&self, tickets: &[String]) -> ResultSet {
        let mut results = ResultSet::new();
        for ticket in tickets {
            let rows = self.lookup_ticket(ticket).await;
            results.insert(ticket.clone(), rows);
        }
        results
    }
}
