//! language.rs — Swahili/English detection and localized caller responses.
//!
//! The intake line serves callers in English and Swahili. Detection is a
//! crude indicator-word count, good enough to pick the confirmation message
//! language; it is not a general-purpose language identifier.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Sw,
}

/// Common Swahili function words plus a few emergency-domain terms.
const SWAHILI_INDICATORS: [&str; 20] = [
    "ni", "na", "wa", "ya", "za", "la", "pa", "kwa", "katika", "mimi", "wewe", "yeye", "sisi",
    "ninyi", "wao", "dharura", "msaada", "polisi", "hospitali", "daktari",
];

/// Heuristic: more than two indicator hits classifies the text as Swahili.
pub fn detect_language(text: &str) -> Lang {
    let lower = text.to_lowercase();
    let hits = SWAHILI_INDICATORS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    if hits > 2 {
        Lang::Sw
    } else {
        Lang::En
    }
}

/// Keys for the localized caller-facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKey {
    Greeting,
    Confirmation,
    NoInput,
}

/// Localized response text for the caller; falls back to English.
pub fn response_text(key: ResponseKey, lang: Lang) -> &'static str {
    match (key, lang) {
        (ResponseKey::Greeting, Lang::En) => {
            "Emergency hotline. Please describe your emergency."
        }
        (ResponseKey::Greeting, Lang::Sw) => {
            "Huduma ya dharura. Tafadhali eleza dharura yako."
        }
        (ResponseKey::Confirmation, Lang::En) => {
            "Thank you. Your emergency has been recorded and help is being dispatched."
        }
        (ResponseKey::Confirmation, Lang::Sw) => {
            "Asante. Dharura yako imerekodiwa na msaada unakuja."
        }
        (ResponseKey::NoInput, Lang::En) => {
            "We didn't receive your message. Please call again."
        }
        (ResponseKey::NoInput, Lang::Sw) => {
            "Hatukupokea ujumbe wako. Tafadhali piga simu tena."
        }
    }
}
