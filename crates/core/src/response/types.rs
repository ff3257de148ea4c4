//! Types for scraped positive responses.

use serde::Serialize;

/// Color category for a positive response.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    /// Clear or marked (codes 10, 20, "no conflict", "marked").
    Green,
    /// Needs attention (codes 55, 60, 80).
    Yellow,
    /// Anything else, including no recognizable response.
    Red,
}

impl ResponseCategory {
    /// CSS class used by the rendered page.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Green => "green",
            ResponseCategory::Yellow => "yellow",
            ResponseCategory::Red => "red",
        }
    }
}

impl std::fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member utility's response to a locate ticket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResponseRow {
    /// Member utility code.
    pub member: String,
    /// Member description (utility type, company name).
    pub description: String,
    /// Response text, usually "<code> - <meaning>".
    pub response: String,
    /// Operator who posted the response.
    pub operator_id: String,
    /// Category derived from `response`.
    pub category: ResponseCategory,
}

/// Rows for one ticket. Empty means no data or an invalid ticket.
pub type TicketResult = Vec<ResponseRow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_css_class() {
        assert_eq!(ResponseCategory::Green.as_str(), "green");
        assert_eq!(ResponseCategory::Yellow.as_str(), "yellow");
        assert_eq!(ResponseCategory::Red.to_string(), "red");
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&ResponseCategory::Yellow).unwrap(),
            "\"yellow\""
        );
    }
}
