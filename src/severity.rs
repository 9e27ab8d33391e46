//! severity.rs — urgency scoring for incoming reports.
//!
//! A report is HIGH when any urgent keyword (English or Swahili) appears in
//! the text, MEDIUM otherwise. Note: the dashboard severity histogram keeps a
//! LOW bucket for compatibility with the original aggregation code, but this
//! scorer can never produce it — the bucket is always zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        }
    }
}

/// Urgent terms, English first, then Swahili.
const URGENT_KEYWORDS: [&str; 10] = [
    "urgent", "emergency", "dying", "dead", "serious", "critical", "haraka", "dharura", "mkuu",
    "hatari",
];

/// Score the urgency of a report text. Never fails.
pub fn score(text: &str) -> Severity {
    let lower = text.to_lowercase();
    for kw in URGENT_KEYWORDS {
        if lower.contains(kw) {
            return Severity::High;
        }
    }
    Severity::Medium
}
