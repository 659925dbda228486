//! Keyword-weighted sentiment with urgency/intensity modifiers.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::lexicon::{Lexicon, contains_any, weighted_hits};

const URGENCY_NEGATIVE_BOOST: f64 = 1.2;
const INTENSITY_BOOST: f64 = 1.1;

const POLAR_BASE: f64 = 0.65;
const POLAR_CAP: f64 = 0.95;
const NEUTRAL_BASE: f64 = 0.5;
const NEUTRAL_CAP: f64 = 0.85;
const SPREAD: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// 0..=0.95 for positive/negative, 0..=0.85 for neutral.
    pub confidence: f64,
    pub suggestion: String,
}

/// Polarity totals after modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentScores {
    /// `lower` must already be lowercased.
    pub fn compute(lower: &str, lex: &Lexicon) -> Self {
        let mut positive = weighted_hits(lower, lex.positive);
        let mut negative = weighted_hits(lower, lex.negative);
        let neutral = weighted_hits(lower, lex.neutral);

        if contains_any(lower, lex.urgency) {
            negative *= URGENCY_NEGATIVE_BOOST;
        }
        if contains_any(lower, lex.intensity) {
            positive *= INTENSITY_BOOST;
            negative *= INTENSITY_BOOST;
        }

        Self {
            positive,
            negative,
            neutral,
        }
    }

    fn total(&self) -> f64 {
        (self.positive + self.negative + self.neutral).max(1.0)
    }

    /// Label and confidence; deterministic.
    pub fn decide(&self) -> (Sentiment, f64) {
        let total = self.total();
        let (pos, neg, neu) = (self.positive, self.negative, self.neutral);

        if neg > 0.0 && neg > pos && neg > neu {
            (Sentiment::Negative, (POLAR_BASE + SPREAD * neg / total).min(POLAR_CAP))
        } else if pos > 0.0 && pos > neg && pos > neu {
            (Sentiment::Positive, (POLAR_BASE + SPREAD * pos / total).min(POLAR_CAP))
        } else {
            (Sentiment::Neutral, (NEUTRAL_BASE + SPREAD * neu / total).min(NEUTRAL_CAP))
        }
    }
}

pub fn analyze_sentiment<R: Rng + ?Sized>(lower: &str, lex: &Lexicon, rng: &mut R) -> SentimentResult {
    let (sentiment, confidence) = SentimentScores::compute(lower, lex).decide();

    let pool = match sentiment {
        Sentiment::Positive => &lex.suggestions.positive,
        Sentiment::Negative => &lex.suggestions.negative,
        Sentiment::Neutral => &lex.suggestions.neutral,
    };
    let suggestion = pool.choose(rng).copied().unwrap_or_default().to_string();

    SentimentResult {
        sentiment,
        confidence,
        suggestion,
    }
}
