//! Table scraping for the response display page.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{classify, ResponseRow};

/// Minimum cells a row needs: member, description, response, operator id.
const MIN_CELLS: usize = 4;

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Extract response rows from the first table in `markup`.
///
/// The first row is treated as the header. Rows with fewer than four data
/// cells are skipped. Returns an empty list when there is no table.
pub fn extract_rows(markup: &str) -> Vec<ResponseRow> {
    let document = Html::parse_document(markup);

    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        return Vec::new();
    };

    table
        .select(&ROW_SELECTOR)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&CELL_SELECTOR).map(cell_text).collect();
            if cells.len() < MIN_CELLS {
                return None;
            }

            let mut cells = cells.into_iter();
            let member = cells.next()?;
            let description = cells.next()?;
            let response = cells.next()?;
            let operator_id = cells.next()?;
            let category = classify(&response);

            Some(ResponseRow {
                member,
                description,
                response,
                operator_id,
                category,
            })
        })
        .collect()
}

/// Text of a cell: each text node trimmed, blanks dropped, joined without a separator.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
