//! Positive response rows scraped from the NC811 response display page.
//!
//! Rows are extracted from the first table of the page and tagged with a
//! color category derived from the response text.

mod classify;
mod extract;
mod types;

pub use classify::classify;
pub use extract::extract_rows;
pub use types::*;
