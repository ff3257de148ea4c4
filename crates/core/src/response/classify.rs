//! Response code classification.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::ResponseCategory;

/// Codes meaning the member is clear or has marked.
const GREEN_CODES: [u64; 2] = [10, 20];

/// Codes meaning the excavator must follow up before digging.
const YELLOW_CODES: [u64; 3] = [55, 60, 80];

/// Keywords that count as green when no code matched.
const GREEN_KEYWORDS: [&str; 2] = ["no conflict", "marked"];

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

/// Classify a response text.
///
/// Standalone numbers are scanned left to right and the first one found in
/// either code set decides, so "Code 80 then Code 20" is yellow. Unknown
/// numbers are skipped. Without a matching code the keywords are checked,
/// and anything left over is red.
pub fn classify(response_text: &str) -> ResponseCategory {
    let codes = NUMBER_REGEX
        .find_iter(response_text)
        .filter_map(|m| m.as_str().parse::<u64>().ok());

    for code in codes {
        if GREEN_CODES.contains(&code) {
            return ResponseCategory::Green;
        }
        if YELLOW_CODES.contains(&code) {
            return ResponseCategory::Yellow;
        }
    }

    let text = response_text.to_lowercase();
    if GREEN_KEYWORDS.iter().any(|k| text.contains(k)) {
        return ResponseCategory::Green;
    }

    ResponseCategory::Red
}
