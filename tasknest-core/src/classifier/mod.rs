//! Rule-based task text classifier.
//!
//! Deterministic, non-ML: language by alphabet/stopword scoring, then
//! per-language keyword tables for sentiment, category, duration and
//! priority. Only the human-readable suggestion is drawn at random.

mod category;
mod duration;
mod language;
mod lexicon;
mod sentiment;
mod summary;

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use category::{Category, categorize};
pub use duration::{DurationTier, MAX_MINUTES, MIN_MINUTES, duration_tier, jitter_minutes, text_hash};
pub use language::{SupportedLanguage, detect_language, language_score};
pub use lexicon::{KeywordPattern, Lexicon, lexicon};
pub use sentiment::{Sentiment, SentimentResult, SentimentScores};

use crate::task::TaskInput;

const NEGATIVE_ESCALATION_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Explicit classifier settings, passed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Skip detection and treat every text as this language.
    #[serde(default)]
    pub language: Option<SupportedLanguage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub language: SupportedLanguage,
    pub sentiment: SentimentResult,
    pub category: Category,
    pub duration_tier: DurationTier,
    pub estimated_minutes: u32,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTask {
    pub id: String,
    pub completed: bool,
    pub analysis: TaskAnalysis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAnalysis {
    pub tasks: Vec<AnalyzedTask>,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub sentiments: SentimentCounts,
    pub average_confidence: f64,
    pub categories: BTreeMap<Category, usize>,
    pub average_minutes: f64,
    /// Estimated minutes left across pending tasks.
    pub pending_minutes: u64,
    /// Most frequent task language.
    pub language: SupportedLanguage,
    pub summary: String,
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    config: ClassifierConfig,
}

impl HeuristicClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn language_of(&self, text: &str) -> SupportedLanguage {
        self.config.language.unwrap_or_else(|| detect_language(text))
    }

    pub fn analyze(&self, text: &str) -> TaskAnalysis {
        self.analyze_with_rng(text, &mut rand::thread_rng())
    }

    pub fn analyze_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> TaskAnalysis {
        let language = self.language_of(text);
        let lex = lexicon(language);
        let lower = text.to_lowercase();

        let sentiment = sentiment::analyze_sentiment(&lower, lex, rng);
        let category = categorize(&lower, lex);
        let (duration_tier, estimated_minutes) =
            duration::estimate_minutes(text, &lower, &lex.duration, lex.urgency);
        let priority = priority_for(&lower, lex, &sentiment);

        TaskAnalysis {
            language,
            sentiment,
            category,
            duration_tier,
            estimated_minutes,
            priority,
        }
    }

    pub fn analyze_list(&self, tasks: &[TaskInput]) -> ListAnalysis {
        self.analyze_list_with_rng(tasks, &mut rand::thread_rng())
    }

    pub fn analyze_list_with_rng<R: Rng + ?Sized>(&self, tasks: &[TaskInput], rng: &mut R) -> ListAnalysis {
        let analyzed: Vec<AnalyzedTask> = tasks
            .iter()
            .map(|t| AnalyzedTask {
                id: t.id.clone(),
                completed: t.completed,
                analysis: self.analyze_with_rng(&t.text, rng),
            })
            .collect();

        let total = analyzed.len();
        let completed = analyzed.iter().filter(|t| t.completed).count();

        let mut sentiments = SentimentCounts::default();
        let mut categories: BTreeMap<Category, usize> = BTreeMap::new();
        let mut languages: BTreeMap<SupportedLanguage, usize> = BTreeMap::new();
        let mut confidence_sum = 0.0;
        let mut minutes_sum = 0u64;
        let mut pending_minutes = 0u64;

        for t in &analyzed {
            let a = &t.analysis;
            match a.sentiment.sentiment {
                Sentiment::Positive => sentiments.positive += 1,
                Sentiment::Negative => sentiments.negative += 1,
                Sentiment::Neutral => sentiments.neutral += 1,
            }
            *categories.entry(a.category).or_insert(0) += 1;
            *languages.entry(a.language).or_insert(0) += 1;
            confidence_sum += a.sentiment.confidence;
            minutes_sum += u64::from(a.estimated_minutes);
            if !t.completed {
                pending_minutes += u64::from(a.estimated_minutes);
            }
        }

        let (average_confidence, average_minutes) = if total == 0 {
            (0.0, 0.0)
        } else {
            (confidence_sum / total as f64, minutes_sum as f64 / total as f64)
        };

        let language = dominant(&languages, &SupportedLanguage::ALL)
            .or(self.config.language)
            .unwrap_or(SupportedLanguage::En);

        let mut out = ListAnalysis {
            tasks: analyzed,
            total,
            completed,
            pending: total - completed,
            sentiments,
            average_confidence,
            categories,
            average_minutes,
            pending_minutes,
            language,
            summary: String::new(),
        };
        out.summary = summary::render(&out);
        out
    }
}

/// Highest count; ties go to the earlier entry of `order`.
fn dominant<K: Ord + Copy>(counts: &BTreeMap<K, usize>, order: &[K]) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for k in order {
        let n = counts.get(k).copied().unwrap_or(0);
        if n == 0 {
            continue;
        }
        match best {
            Some((_, b)) if n <= b => {}
            _ => best = Some((*k, n)),
        }
    }
    best.map(|(k, _)| k)
}

fn priority_for(lower: &str, lex: &Lexicon, sentiment: &SentimentResult) -> Priority {
    if lexicon::contains_any(lower, lex.high_priority) {
        Priority::High
    } else if lexicon::contains_any(lower, lex.low_priority) {
        Priority::Low
    } else if sentiment.sentiment == Sentiment::Negative
        && sentiment.confidence > NEGATIVE_ESCALATION_CONFIDENCE
    {
        Priority::High
    } else {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classify(text: &str) -> TaskAnalysis {
        HeuristicClassifier::default().analyze_with_rng(text, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_russian_urgent_bug() {
        let a = classify("Срочно исправить критичный баг");
        assert_eq!(a.language, SupportedLanguage::Ru);
        assert_eq!(a.sentiment.sentiment, Sentiment::Negative);
        assert!(a.sentiment.confidence > 0.65);
        assert_eq!(a.category, Category::Work);
        assert_eq!(a.priority, Priority::High);
    }

    #[test]
    fn test_english_groceries() {
        let a = classify("I need to buy groceries");
        assert_eq!(a.language, SupportedLanguage::En);
        assert_eq!(a.category, Category::Home);
        assert_eq!(a.duration_tier, DurationTier::Quick);
        assert_eq!(a.duration_tier.base_minutes(), 30);
        assert_eq!(a.priority, Priority::Medium);
    }

    #[test]
    fn test_low_priority_keyword() {
        let a = classify("maybe repaint the fence someday");
        assert_eq!(a.priority, Priority::Low);
    }

    #[test]
    fn test_negative_confidence_escalates_priority() {
        // No high/low keyword, strongly negative
        let a = classify("laptop broken again, so tired");
        assert_eq!(a.sentiment.sentiment, Sentiment::Negative);
        assert!(a.sentiment.confidence > 0.7);
        assert_eq!(a.priority, Priority::High);
    }

    #[test]
    fn test_empty_text_defaults() {
        let a = classify("");
        assert_eq!(a.language, SupportedLanguage::En);
        assert_eq!(a.sentiment.sentiment, Sentiment::Neutral);
        assert_eq!(a.sentiment.confidence, 0.5);
        assert_eq!(a.category, Category::General);
        assert_eq!(a.duration_tier, DurationTier::Medium);
        assert_eq!(a.priority, Priority::Medium);
        assert!((50..=70).contains(&a.estimated_minutes));
    }

    #[test]
    fn test_forced_language_skips_detection() {
        let c = HeuristicClassifier::new(ClassifierConfig {
            language: Some(SupportedLanguage::Kz),
        });
        let a = c.analyze_with_rng("I need to buy groceries", &mut StdRng::seed_from_u64(1));
        assert_eq!(a.language, SupportedLanguage::Kz);
        // No Kazakh keywords in English text
        assert_eq!(a.category, Category::General);
    }

    #[test]
    fn test_analyze_list_aggregates() {
        let tasks = vec![
            TaskInput::new("1", "Срочно исправить критичный баг", false),
            TaskInput::new("2", "Купить продукты", true),
            TaskInput::new("3", "Позвонить маме", false),
        ];
        let r = HeuristicClassifier::default()
            .analyze_list_with_rng(&tasks, &mut StdRng::seed_from_u64(3));

        assert_eq!(r.total, 3);
        assert_eq!(r.completed, 1);
        assert_eq!(r.pending, 2);
        assert_eq!(r.language, SupportedLanguage::Ru);
        assert_eq!(r.sentiments.positive + r.sentiments.negative + r.sentiments.neutral, 3);
        assert_eq!(r.categories.values().sum::<usize>(), 3);
        assert_eq!(r.categories.get(&Category::Work), Some(&1));
        assert!(r.average_confidence > 0.0 && r.average_confidence <= 0.95);

        let expected_pending: u64 = r
            .tasks
            .iter()
            .filter(|t| !t.completed)
            .map(|t| u64::from(t.analysis.estimated_minutes))
            .sum();
        assert_eq!(r.pending_minutes, expected_pending);
        assert!(!r.summary.is_empty());
    }

    #[test]
    fn test_analyze_empty_list() {
        let r = HeuristicClassifier::default().analyze_list(&[]);
        assert_eq!(r.total, 0);
        assert_eq!(r.average_confidence, 0.0);
        assert_eq!(r.average_minutes, 0.0);
        assert_eq!(r.language, SupportedLanguage::En);
        assert!(!r.average_confidence.is_nan());
    }

    #[test]
    fn test_dominant_tie_uses_order() {
        let mut counts = BTreeMap::new();
        counts.insert(SupportedLanguage::Kz, 2);
        counts.insert(SupportedLanguage::En, 2);
        assert_eq!(dominant(&counts, &SupportedLanguage::ALL), Some(SupportedLanguage::En));
    }
}
