//! Language detection over the three supported languages.
//!
//! Score per language:
//! - +0.5 per alphabet-class character
//! - +4 per common stopword
//! - +1 per characteristic word ending
//!
//! Kazakh Cyrillic contains the whole Russian alphabet plus nine letters of
//! its own, so the Kazakh alphabet class is the superset and plain Russian
//! text ties on alphabet; stopwords and endings decide it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    Ru,
    En,
    Kz,
}

impl SupportedLanguage {
    /// Evaluation order; earlier wins ties.
    pub const ALL: [SupportedLanguage; 3] =
        [SupportedLanguage::Ru, SupportedLanguage::En, SupportedLanguage::Kz];

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::Ru => "ru",
            SupportedLanguage::En => "en",
            SupportedLanguage::Kz => "kz",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(SupportedLanguage::Ru),
            "en" => Ok(SupportedLanguage::En),
            "kz" | "kk" => Ok(SupportedLanguage::Kz),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

const SHORT_TEXT_CHARS: usize = 10;
const SHORT_TEXT_BONUS: f64 = 5.0;

struct LanguageRules {
    alphabet: Regex,
    stopwords: Regex,
    suffixes: Regex,
}

// Patterns are string literals; compiling them cannot fail at runtime.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("language pattern must compile")
}

fn rules(alphabet: &str, stopwords: &str, suffixes: &str) -> LanguageRules {
    LanguageRules {
        alphabet: compile(alphabet),
        stopwords: compile(stopwords),
        suffixes: compile(suffixes),
    }
}

static RU: LazyLock<LanguageRules> = LazyLock::new(|| {
    rules(
        r"[а-яё]",
        r"\b(?:и|в|не|на|я|что|с|по|это|нужно|надо|для|как|мне|к|у)\b",
        r"(?:ть|ться|ся|ние|ость|ый|ий|ая|ого)\b",
    )
});

static EN: LazyLock<LanguageRules> = LazyLock::new(|| {
    rules(
        r"[a-z]",
        r"\b(?:the|and|to|of|a|an|in|is|for|on|with|my|i|need|at|it)\b",
        r"(?:ing|ed|tion|ly|ness)\b",
    )
});

static KZ: LazyLock<LanguageRules> = LazyLock::new(|| {
    rules(
        r"[а-яёәғқңөұүһі]",
        r"\b(?:және|мен|бұл|үшін|керек|деп|бір|бар|жоқ|та|те|да|де|маған)\b",
        r"(?:лар|лер|дар|дер|тар|тер|мын|мін|ған|ген|ңыз|ңіз)\b",
    )
});

static CYRILLIC_NOT_KZ: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[а-яё]"));
static KZ_SPECIFIC: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[әғқңөұүһі]"));
static ASCII_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z\s]+$"));

fn rules_for(lang: SupportedLanguage) -> &'static LanguageRules {
    match lang {
        SupportedLanguage::Ru => &RU,
        SupportedLanguage::En => &EN,
        SupportedLanguage::Kz => &KZ,
    }
}

/// Raw score of `text` for one language.
pub fn language_score(text: &str, lang: SupportedLanguage) -> f64 {
    let lower = text.to_lowercase();
    let r = rules_for(lang);

    let mut score = 0.5 * r.alphabet.find_iter(&lower).count() as f64
        + 4.0 * r.stopwords.find_iter(&lower).count() as f64
        + r.suffixes.find_iter(&lower).count() as f64;

    if text.chars().count() < SHORT_TEXT_CHARS {
        let hit = match lang {
            SupportedLanguage::Ru => {
                CYRILLIC_NOT_KZ.is_match(&lower) && !KZ_SPECIFIC.is_match(&lower)
            }
            SupportedLanguage::Kz => KZ_SPECIFIC.is_match(&lower),
            SupportedLanguage::En => ASCII_WORDS.is_match(text),
        };
        if hit {
            score += SHORT_TEXT_BONUS;
        }
    }

    score
}

pub fn detect_language(text: &str) -> SupportedLanguage {
    let mut best = SupportedLanguage::En;
    let mut best_score = 0.0_f64;

    for lang in SupportedLanguage::ALL {
        let score = language_score(text, lang);
        if score > best_score {
            best = lang;
            best_score = score;
        }
    }

    best
}
