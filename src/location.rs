//! location.rs — best-effort location extraction from report text.
//!
//! A small ordered set of prepositional patterns (English "at/in/near",
//! Swahili "kwa"/"karibu na") is tried against the raw text; the first
//! capture wins. There is no NER here — this is a heuristic the dashboard
//! can live with, and it degrades to a sentinel rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when no pattern matches. The dashboard renders it verbatim.
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)at\s+([A-Za-z\s]+)",
        r"(?i)in\s+([A-Za-z\s]+)",
        r"(?i)near\s+([A-Za-z\s]+)",
        r"(?i)kwa\s+([A-Za-z\s]+)",
        r"(?i)karibu na\s+([A-Za-z\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid location pattern"))
    .collect()
});

/// Extract a location phrase from `text`, trimmed of surrounding whitespace.
/// Falls back to [`LOCATION_NOT_SPECIFIED`]. Never fails.
pub fn extract_location(text: &str) -> String {
    for pattern in LOCATION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(m) = caps.get(1) {
                return m.as_str().trim().to_string();
            }
        }
    }
    LOCATION_NOT_SPECIFIED.to_string()
}
