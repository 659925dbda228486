use std::fmt;

use serde::{Deserialize, Serialize};

use super::SupportedLanguage;
use super::lexicon::{Lexicon, contains_any};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Study,
    Transport,
    Home,
    Health,
    General,
}

impl Category {
    /// Display name in `lang`.
    pub fn label(&self, lang: SupportedLanguage) -> &'static str {
        use Category::*;
        use SupportedLanguage::*;
        match (lang, self) {
            (En, Work) => "work",
            (En, Study) => "study",
            (En, Transport) => "transport",
            (En, Home) => "home",
            (En, Health) => "health",
            (En, General) => "general",
            (Ru, Work) => "работа",
            (Ru, Study) => "учёба",
            (Ru, Transport) => "транспорт",
            (Ru, Home) => "дом",
            (Ru, Health) => "здоровье",
            (Ru, General) => "общее",
            (Kz, Work) => "жұмыс",
            (Kz, Study) => "оқу",
            (Kz, Transport) => "көлік",
            (Kz, Home) => "үй",
            (Kz, Health) => "денсаулық",
            (Kz, General) => "жалпы",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// First category in declared order with a keyword in `lower`.
pub fn categorize(lower: &str, lex: &Lexicon) -> Category {
    lex.categories
        .iter()
        .find(|c| contains_any(lower, c.words))
        .map(|c| c.category)
        .unwrap_or(Category::General)
}
