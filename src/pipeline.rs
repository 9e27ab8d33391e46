//! # Triage Pipeline
//!
//! Assembles one [`EmergencyReport`] from a raw transcribed text. The four
//! leaf analyses (taxonomy, severity, location, summary) run independently
//! of each other; the action recommender consumes (category, severity).
//!
//! Processing is synchronous and sequential — there is no internal
//! parallelism, no timeout around the model call, and no retry anywhere. A
//! hung summarization call hangs the whole request; the worst non-hang
//! outcome is a degraded placeholder field.

use chrono::Utc;

use crate::actions;
use crate::location;
use crate::report::EmergencyReport;
use crate::severity;
use crate::summarize::Summarizer;
use crate::taxonomy;

/// Caller metadata attached by the telephony layer, not produced here.
#[derive(Debug, Clone, Default)]
pub struct CallerMeta {
    pub caller_number: Option<String>,
    pub call_sid: Option<String>,
}

/// Holds the injected summarization capability; everything else is static.
#[derive(Clone)]
pub struct ReportPipeline {
    summarizer: Summarizer,
}

impl ReportPipeline {
    pub fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }

    /// Process one transcribed text into a complete report, stamped with the
    /// current time. Never fails: every component degrades to a sentinel or
    /// placeholder value instead of erroring.
    pub async fn process(&self, text: &str, meta: CallerMeta) -> EmergencyReport {
        let emergency_type = taxonomy::classify(text);
        let severity = severity::score(text);
        let location = location::extract_location(text);
        let summary = self.summarizer.summarize(text).await;
        let recommended_actions = actions::recommend(emergency_type, severity);

        EmergencyReport {
            original_text: text.to_string(),
            summary,
            emergency_type,
            location,
            severity,
            recommended_actions,
            timestamp: Utc::now(),
            caller_number: meta.caller_number,
            call_sid: meta.call_sid,
        }
    }
}
