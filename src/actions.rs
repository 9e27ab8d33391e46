//! # Action Recommender
//!
//! Static mapping from emergency category to an ordered list of response
//! actions. HIGH-severity reports get an urgent marker prepended. The table
//! is a process-wide immutable constant: `recommend` always hands back a
//! fresh copy, never a reference into the table.

use once_cell::sync::Lazy;

use crate::severity::Severity;
use crate::taxonomy::Category;

/// Marker prepended to the action list of HIGH-severity reports.
pub const URGENT_MARKER: &str = "⚠️ URGENT: Immediate response required";

static ACTION_TABLE: Lazy<Vec<(Category, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            Category::Medical,
            vec![
                "Dispatch ambulance immediately",
                "Contact nearest hospital",
                "Gather medical history if possible",
                "Provide first aid instructions if trained personnel available",
            ],
        ),
        (
            Category::Fire,
            vec![
                "Alert fire department",
                "Evacuate surrounding areas",
                "Check for casualties",
                "Ensure water supply access for firefighters",
            ],
        ),
        (
            Category::Crime,
            vec![
                "Dispatch police units",
                "Secure the area",
                "Interview witnesses",
                "Preserve evidence",
            ],
        ),
        (
            Category::Accident,
            vec![
                "Send emergency responders",
                "Clear traffic if road accident",
                "Check for injuries",
                "Contact relevant authorities",
            ],
        ),
        (
            Category::NaturalDisaster,
            vec![
                "Activate emergency protocols",
                "Coordinate with disaster management",
                "Evacuate if necessary",
                "Provide emergency supplies",
            ],
        ),
        (
            Category::General,
            vec![
                "Assess situation",
                "Dispatch appropriate responders",
                "Maintain communication with caller",
                "Document incident details",
            ],
        ),
    ]
});

fn base_actions(category: Category) -> &'static [&'static str] {
    ACTION_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, a)| a.as_slice())
        // Every category has an entry; `general` doubles as the fallback.
        .unwrap_or_else(|| {
            ACTION_TABLE
                .last()
                .map(|(_, a)| a.as_slice())
                .expect("action table is non-empty")
        })
}

/// Recommended response actions for `(category, severity)`, in dispatch
/// order. Returns an owned list; the shared table is never mutated.
pub fn recommend(category: Category, severity: Severity) -> Vec<String> {
    let mut actions: Vec<String> = base_actions(category)
        .iter()
        .map(|a| a.to_string())
        .collect();

    if severity == Severity::High {
        actions.insert(0, URGENT_MARKER.to_string());
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_an_entry() {
        for c in Category::ALL {
            assert_eq!(recommend(c, Severity::Medium).len(), 4, "{c:?}");
        }
    }

    #[test]
    fn high_severity_prepends_urgent_marker() {
        let actions = recommend(Category::Fire, Severity::High);
        assert_eq!(actions.len(), 5);
        assert_eq!(actions[0], URGENT_MARKER);
        assert_eq!(actions[1], "Alert fire department");
        assert_eq!(actions[4], "Ensure water supply access for firefighters");
    }

    #[test]
    fn high_call_does_not_mutate_the_shared_table() {
        let _ = recommend(Category::Fire, Severity::High);
        let _ = recommend(Category::Fire, Severity::High);
        // A later MEDIUM call must still get the plain four-entry list.
        let plain = recommend(Category::Fire, Severity::Medium);
        assert_eq!(plain.len(), 4);
        assert_eq!(plain[0], "Alert fire department");
    }

    #[test]
    fn medium_severity_keeps_declared_order() {
        let actions = recommend(Category::Crime, Severity::Medium);
        assert_eq!(
            actions,
            vec![
                "Dispatch police units",
                "Secure the area",
                "Interview witnesses",
                "Preserve evidence",
            ]
        );
    }
}
