//! report.rs — data shapes for processed emergency reports and the derived
//! dashboard summary.
//!
//! An [`EmergencyReport`] is created once per processed input and is
//! immutable afterwards; the store only appends it and writes it to disk.
//! [`DashboardSummary`] is always recomputed from the full collection — it is
//! cheap at expected volumes and caching would only invite staleness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::severity::Severity;
use crate::taxonomy::Category;

/// One fully processed emergency call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyReport {
    /// Transcribed speech as received from the intake layer.
    pub original_text: String,
    /// Abstractive summary, or the original text for short inputs, or a
    /// "Summary generation failed: ..." placeholder on model errors.
    pub summary: String,
    pub emergency_type: Category,
    pub location: String,
    pub severity: Severity,
    pub recommended_actions: Vec<String>,
    /// Stamped at assembly time; ISO-8601 on the wire.
    pub timestamp: DateTime<Utc>,
    /// Caller metadata attached by the telephony layer, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,
}

/// Derived dashboard statistics. Counts always equal a fresh recount of the
/// in-memory collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub high_severity: usize,
    /// Per-category counts, keyed by the snake_case category name.
    pub by_category: BTreeMap<String, usize>,
    /// Severity histogram. Carries a LOW bucket for compatibility with the
    /// original dashboard even though the scorer never produces LOW.
    pub by_severity: BTreeMap<String, usize>,
}

impl DashboardSummary {
    /// Recount from scratch over `reports`.
    pub fn compute(reports: &[EmergencyReport]) -> Self {
        let mut by_category = BTreeMap::new();
        let mut by_severity: BTreeMap<String, usize> =
            [("HIGH", 0), ("MEDIUM", 0), ("LOW", 0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
        let mut high_severity = 0;

        for r in reports {
            *by_category
                .entry(r.emergency_type.as_str().to_string())
                .or_insert(0) += 1;
            *by_severity
                .entry(r.severity.as_str().to_string())
                .or_insert(0) += 1;
            if r.severity == Severity::High {
                high_severity += 1;
            }
        }

        Self {
            total: reports.len(),
            high_severity,
            by_category,
            by_severity,
        }
    }

    /// Human-readable block for the dashboard UI. Wording is cosmetic.
    pub fn render_text(&self) -> String {
        if self.total == 0 {
            return "No emergency reports available.".to_string();
        }

        let mut out = String::new();
        out.push_str("## Emergency Response Dashboard Summary\n\n");
        out.push_str(&format!("**Total Reports:** {}\n", self.total));
        out.push_str(&format!("**High Severity Cases:** {}\n", self.high_severity));
        out.push_str("**Emergency Types Distribution:**\n");
        for (category, count) in &self.by_category {
            out.push_str(&format!("- {}: {}\n", title_case(category), count));
        }
        out
    }
}

/// "natural_disaster" -> "Natural_Disaster" (matches the original UI labels).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            out.push(ch);
            upper_next = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(category: Category, severity: Severity) -> EmergencyReport {
        EmergencyReport {
            original_text: "text".into(),
            summary: "text".into(),
            emergency_type: category,
            location: "Westlands".into(),
            severity,
            recommended_actions: vec!["Assess situation".into()],
            timestamp: Utc::now(),
            caller_number: None,
            call_sid: None,
        }
    }

    #[test]
    fn summary_counts_match_collection() {
        let reports = vec![
            report(Category::Fire, Severity::High),
            report(Category::Fire, Severity::Medium),
            report(Category::Medical, Severity::High),
        ];
        let s = DashboardSummary::compute(&reports);
        assert_eq!(s.total, 3);
        assert_eq!(s.high_severity, 2);
        assert_eq!(s.by_category["fire"], 2);
        assert_eq!(s.by_category["medical"], 1);
        assert_eq!(s.by_severity["HIGH"], 2);
        assert_eq!(s.by_severity["MEDIUM"], 1);
    }

    #[test]
    fn low_bucket_exists_but_stays_empty() {
        let reports = vec![report(Category::Crime, Severity::High)];
        let s = DashboardSummary::compute(&reports);
        assert_eq!(s.by_severity["LOW"], 0);
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let s = DashboardSummary::compute(&[]);
        assert_eq!(s.render_text(), "No emergency reports available.");
    }

    #[test]
    fn report_serializes_iso8601_timestamp() {
        let r = report(Category::General, Severity::Medium);
        let v = serde_json::to_value(&r).unwrap();
        let ts = v["timestamp"].as_str().unwrap();
        assert!(ts.contains('T'), "ISO-8601 expected, got {ts}");
        assert_eq!(v["emergency_type"], serde_json::json!("general"));
        assert_eq!(v["severity"], serde_json::json!("MEDIUM"));
        // Absent caller metadata is omitted on the wire.
        assert!(v.get("caller_number").is_none());
    }

    #[test]
    fn title_case_matches_ui_labels() {
        assert_eq!(title_case("natural_disaster"), "Natural_Disaster");
        assert_eq!(title_case("fire"), "Fire");
    }
}
