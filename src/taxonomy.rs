//! # Taxonomy Matcher
//!
//! Maps free-text emergency descriptions to a coarse category using a static
//! multilingual keyword table (English + Swahili).
//!
//! - Categories are checked in a fixed declared order; the first category
//!   with any matching keyword wins. No scoring or ranking across categories.
//! - Matching is plain substring containment on the lowercased text, so
//!   "fired" matches `fire`. That imprecision comes from the original intake
//!   system and is preserved here, not fixed with word boundaries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Coarse triage class assigned to an incoming report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Medical,
    Fire,
    Crime,
    Accident,
    NaturalDisaster,
    General,
}

impl Category {
    /// All categories, in the order they appear in dashboard breakdowns.
    pub const ALL: [Category; 6] = [
        Category::Medical,
        Category::Fire,
        Category::Crime,
        Category::Accident,
        Category::NaturalDisaster,
        Category::General,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medical => "medical",
            Category::Fire => "fire",
            Category::Crime => "crime",
            Category::Accident => "accident",
            Category::NaturalDisaster => "natural_disaster",
            Category::General => "general",
        }
    }
}

/// Keyword table. Order matters: classification walks this slice top to
/// bottom and returns on the first hit, so `medical` shadows every later
/// category for texts that mention both.
static TAXONOMY: Lazy<Vec<(Category, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            Category::Medical,
            vec![
                "hospital",
                "doctor",
                "sick",
                "injured",
                "ambulance",
                "pain",
                "bleeding",
                "daktari",
                "mgonjwa",
                "hospitali",
                "ambulensi",
                "umwagika",
                "maumivu",
            ],
        ),
        (
            Category::Fire,
            vec!["fire", "smoke", "burning", "flame", "moto", "moshi"],
        ),
        (
            Category::Crime,
            vec![
                "robbery",
                "theft",
                "attack",
                "violence",
                "police",
                "wizi",
                "polisi",
                "shambulio",
                "jeuri",
            ],
        ),
        (
            Category::Accident,
            vec!["accident", "crash", "collision", "vehicle", "ajali", "gari"],
        ),
        (
            Category::NaturalDisaster,
            vec!["flood", "earthquake", "storm", "mafuriko", "tetemeko"],
        ),
    ]
});

/// Classify a report text into a [`Category`].
///
/// Total: returns `Category::General` when no keyword matches. Never fails.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (category, keywords) in TAXONOMY.iter() {
        for kw in keywords {
            if lower.contains(kw) {
                return *category;
            }
        }
    }
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_keyword_maps_to_fire() {
        assert_eq!(classify("There is smoke everywhere"), Category::Fire);
        assert_eq!(classify("MOTO kubwa hapa"), Category::Fire);
    }

    #[test]
    fn first_category_in_order_wins() {
        // "injured" (medical) appears, and medical is checked before accident.
        let c = classify("A vehicle crash, someone is injured");
        assert_eq!(c, Category::Medical);
    }

    #[test]
    fn substring_containment_is_intentional() {
        // "fired" contains "fire"; the heuristic accepts the false positive.
        assert_eq!(classify("he was fired from his job"), Category::Fire);
    }

    #[test]
    fn unmatched_text_falls_back_to_general() {
        assert_eq!(classify("nothing interesting here"), Category::General);
        assert_eq!(classify(""), Category::General);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("ROBBERY in progress"), Category::Crime);
    }

    #[test]
    fn serializes_snake_case() {
        let v = serde_json::to_value(Category::NaturalDisaster).unwrap();
        assert_eq!(v, serde_json::json!("natural_disaster"));
    }
}
