//! Duration estimate: keyword tier, multiplicative modifiers, and a
//! deterministic per-text offset.

use serde::{Deserialize, Serialize};

use super::lexicon::{DurationWords, contains_any};

pub const MIN_MINUTES: i64 = 5;
pub const MAX_MINUTES: i64 = 480;

const COMPLEXITY_FACTOR: f64 = 1.5;
const SIMPLICITY_FACTOR: f64 = 0.7;
const URGENCY_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationTier {
    VeryQuick,
    Quick,
    Medium,
    Long,
    VeryLong,
}

impl DurationTier {
    pub fn base_minutes(&self) -> u32 {
        match self {
            DurationTier::VeryQuick => 15,
            DurationTier::Quick => 30,
            DurationTier::Medium => 60,
            DurationTier::Long => 180,
            DurationTier::VeryLong => 300,
        }
    }
}

/// First tier whose keywords occur in `lower`.
///
/// Order is very quick, quick, long, very long, then medium: a text that
/// names both a medium and a long activity resolves to long.
pub fn duration_tier(lower: &str, words: &DurationWords) -> DurationTier {
    let checks = [
        (DurationTier::VeryQuick, words.very_quick),
        (DurationTier::Quick, words.quick),
        (DurationTier::Long, words.long),
        (DurationTier::VeryLong, words.very_long),
        (DurationTier::Medium, words.medium),
    ];
    checks
        .into_iter()
        .find(|(_, kw)| contains_any(lower, kw))
        .map(|(tier, _)| tier)
        .unwrap_or(DurationTier::Medium)
}

/// 32-bit rolling hash over UTF-16 code units: `h = h * 31 + unit`, wrapping.
pub fn text_hash(text: &str) -> u32 {
    let h = text
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    h.unsigned_abs()
}

/// Offset in minutes, in `-10..=10`.
pub fn jitter_minutes(text: &str) -> i64 {
    i64::from(text_hash(text) % 21) - 10
}

/// `raw` is the original text (hashed as-is), `lower` its lowercased form.
pub fn estimate_minutes(raw: &str, lower: &str, words: &DurationWords, urgency: &[&str]) -> (DurationTier, u32) {
    let tier = duration_tier(lower, words);
    let mut minutes = f64::from(tier.base_minutes());

    if contains_any(lower, words.complexity) {
        minutes *= COMPLEXITY_FACTOR;
    } else if contains_any(lower, words.simplicity) {
        minutes *= SIMPLICITY_FACTOR;
    }
    if contains_any(lower, urgency) {
        minutes *= URGENCY_FACTOR;
    }

    let total = (minutes.round() as i64 + jitter_minutes(raw)).clamp(MIN_MINUTES, MAX_MINUTES);
    (tier, total as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{SupportedLanguage, lexicon::lexicon};

    #[test]
    fn test_text_hash_matches_reference_values() {
        assert_eq!(text_hash(""), 0);
        assert_eq!(text_hash("a"), 97);
        // 97 * 31 + 98
        assert_eq!(text_hash("ab"), 3105);
    }

    #[test]
    fn test_text_hash_wraps_and_takes_abs() {
        let long = "x".repeat(64);
        let h = text_hash(&long);
        // Same input, same hash; wrapping never panics
        assert_eq!(h, text_hash(&long));
    }

    #[test]
    fn test_jitter_range() {
        for s in ["", "a", "Buy milk", "Срочно исправить критичный баг", "үй жинау"] {
            let j = jitter_minutes(s);
            assert!((-10..=10).contains(&j), "{s}: {j}");
        }
        // hash("a") = 97; 97 % 21 = 13
        assert_eq!(jitter_minutes("a"), 3);
    }

    #[test]
    fn test_long_beats_medium() {
        let words = &lexicon(SupportedLanguage::En).duration;
        assert_eq!(duration_tier("project meeting", words), DurationTier::Long);
        assert_eq!(duration_tier("team meeting", words), DurationTier::Medium);
        assert_eq!(duration_tier("nothing matches here", words), DurationTier::Medium);
    }

    #[test]
    fn test_quick_tier_for_groceries() {
        let words = &lexicon(SupportedLanguage::En).duration;
        assert_eq!(duration_tier("i need to buy groceries", words), DurationTier::Quick);
    }

    #[test]
    fn test_estimate_is_clamped() {
        let lex = lexicon(SupportedLanguage::En);
        // 15 * 0.7 * 0.8 = 8.4 -> 8, jitter may take it below 5
        for text in ["quick easy call urgent", "simple text asap", ""] {
            let (_, m) = estimate_minutes(text, &text.to_lowercase(), &lex.duration, lex.urgency);
            assert!((5..=480).contains(&m), "{text}: {m}");
        }
        // 300 * 1.5 = 450; jitter up to +10 stays in range
        let text = "complex renovation thesis";
        let (tier, m) = estimate_minutes(text, text, &lex.duration, lex.urgency);
        assert_eq!(tier, DurationTier::VeryLong);
        assert!((440..=460).contains(&m));
    }
}
