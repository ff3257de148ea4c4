//! HTML rendering of ticket results.
//!
//! The page is built by hand; every value that comes from the request or the
//! upstream page goes through `html_escape`.

use std::fmt::Write;

use crate::lookup::ResultSet;
use crate::response::ResponseRow;

/// Page title and heading.
pub const PAGE_TITLE: &str = "NC811 Positive Responses";

/// Shown in a ticket card with no rows.
pub const NO_DATA_MESSAGE: &str = "No data found or ticket invalid.";

/// Shown instead of ticket cards when no tickets were requested.
pub const NO_TICKETS_MESSAGE: &str =
    "No tickets specified. Use <code>?tickets=123456789,987654321</code> in the URL.";

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; margin: 10px; padding: 0; background: #f5f5f5; }
    h1 { text-align: center; }
    .ticket { background: white; padding: 15px; margin-bottom: 25px; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
    table { width: 100%; border-collapse: collapse; margin-top: 10px; }
    th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; font-size: 14px; }
    th { background: #333; color: white; }
    tr.green { background-color: #c8f7c5; }
    tr.yellow { background-color: #fff8c4; }
    tr.red { background-color: #f7c5c5; }
    @media (max-width: 600px) {
      th, td { font-size: 16px; padding: 10px; }
    }
"#;

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the results page.
pub fn render_page(results: &ResultSet) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!doctype html>\n<html>\n<head>\n");
    let _ = writeln!(html, "  <title>{}</title>", PAGE_TITLE);
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str("  <style>\n");
    html.push_str(STYLE);
    html.push_str("  </style>\n</head>\n<body>\n");
    let _ = writeln!(html, "  <h1>{}</h1>", PAGE_TITLE);

    if results.is_empty() {
        let _ = writeln!(html, "  <p>{}</p>", NO_TICKETS_MESSAGE);
    } else {
        for (ticket, rows) in results.iter() {
            render_ticket(&mut html, ticket, rows);
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_ticket(html: &mut String, ticket: &str, rows: &[ResponseRow]) {
    html.push_str("  <div class=\"ticket\">\n");
    let _ = writeln!(html, "    <h2>Ticket {}</h2>", html_escape(ticket));

    if rows.is_empty() {
        let _ = writeln!(html, "    <p>{}</p>", NO_DATA_MESSAGE);
    } else {
        html.push_str("    <table>\n      <thead>\n");
        html.push_str(
            "        <tr><th>Member</th><th>Description</th><th>Response</th><th>Op ID</th></tr>\n",
        );
        html.push_str("      </thead>\n      <tbody>\n");
        for row in rows {
            let _ = writeln!(
                html,
                "        <tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.category.as_str(),
                html_escape(&row.member),
                html_escape(&row.description),
                html_escape(&row.response),
                html_escape(&row.operator_id),
            );
        }
        html.push_str("      </tbody>\n    </table>\n");
    }

    html.push_str("  </div>\n");
}
