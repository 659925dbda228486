//! Per-language keyword tables.
//!
//! Matching is substring containment against the lowercased text, so a stem
//! like "отчет" covers its inflections, and "car" also fires inside "card".

use super::SupportedLanguage;
use super::category::Category;

#[derive(Debug, Clone, Copy)]
pub struct KeywordPattern {
    pub words: &'static [&'static str],
    pub weight: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Suggestions {
    pub positive: [&'static str; 3],
    pub negative: [&'static str; 3],
    pub neutral: [&'static str; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryWords {
    pub category: Category,
    pub words: &'static [&'static str],
}

#[derive(Debug)]
pub struct DurationWords {
    pub very_quick: &'static [&'static str],
    pub quick: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub long: &'static [&'static str],
    pub very_long: &'static [&'static str],
    pub complexity: &'static [&'static str],
    pub simplicity: &'static [&'static str],
}

#[derive(Debug)]
pub struct Lexicon {
    pub positive: &'static [KeywordPattern],
    pub negative: &'static [KeywordPattern],
    pub neutral: &'static [KeywordPattern],
    pub urgency: &'static [&'static str],
    pub intensity: &'static [&'static str],
    /// Checked in order; first hit wins.
    pub categories: &'static [CategoryWords],
    pub duration: DurationWords,
    pub high_priority: &'static [&'static str],
    pub low_priority: &'static [&'static str],
    pub suggestions: Suggestions,
}

pub fn lexicon(lang: SupportedLanguage) -> &'static Lexicon {
    match lang {
        SupportedLanguage::Ru => &RU,
        SupportedLanguage::En => &EN,
        SupportedLanguage::Kz => &KZ,
    }
}

/// Any of `words` occurs in the already-lowercased `text`.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Sum of weights over every word found in `text`.
pub fn weighted_hits(text: &str, patterns: &[KeywordPattern]) -> f64 {
    patterns
        .iter()
        .map(|p| p.words.iter().filter(|w| text.contains(*w)).count() as f64 * p.weight)
        .sum()
}

static EN: Lexicon = Lexicon {
    positive: &[
        KeywordPattern {
            words: &["great", "happy", "love", "enjoy", "excited", "fun", "celebrate", "awesome", "wonderful"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["good", "nice", "relax", "party", "gift", "vacation", "birthday"],
            weight: 1.0,
        },
    ],
    negative: &[
        KeywordPattern {
            words: &["urgent", "critical", "emergency", "problem", "broken", "fail", "crash", "bug", "angry", "stress"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["late", "overdue", "difficult", "tired", "worry", "sick", "pain", "fix"],
            weight: 1.0,
        },
    ],
    neutral: &[KeywordPattern {
        words: &["meeting", "call", "email", "review", "plan", "schedule", "check", "update", "buy", "need"],
        weight: 1.0,
    }],
    urgency: &["urgent", "asap", "immediately", "right away", "deadline", "today"],
    intensity: &["very", "really", "extremely", "so much", "totally"],
    categories: &[
        CategoryWords {
            category: Category::Work,
            words: &["work", "meeting", "report", "project", "client", "office", "deadline", "presentation", "email", "bug", "deploy", "colleague", "boss"],
        },
        CategoryWords {
            category: Category::Study,
            words: &["study", "exam", "homework", "lecture", "course", "lesson", "learn", "university", "school", "essay", "assignment"],
        },
        CategoryWords {
            category: Category::Transport,
            words: &["car", "bus", "train", "taxi", "drive", "fuel", "flight", "airport", "ticket", "metro", "parking"],
        },
        CategoryWords {
            category: Category::Home,
            words: &["home", "clean", "cook", "groceries", "laundry", "buy", "shop", "dishes", "repair", "rent", "kitchen"],
        },
        CategoryWords {
            category: Category::Health,
            words: &["doctor", "gym", "workout", "medicine", "pill", "dentist", "hospital", "yoga", "health", "run"],
        },
    ],
    duration: DurationWords {
        very_quick: &["call", "text", "reply", "remind", "quick", "check", "pay"],
        quick: &["buy", "groceries", "shop", "email", "read", "wash", "pick up"],
        medium: &["meeting", "cook", "clean", "appointment", "review", "workout", "gym"],
        long: &["project", "presentation", "study", "exam", "trip", "repair", "report"],
        very_long: &["move", "renovation", "marathon", "all day", "conference", "thesis"],
        complexity: &["complex", "complicated", "difficult", "detailed", "thorough", "big"],
        simplicity: &["simple", "easy", "small", "short", "minor"],
    },
    high_priority: &["urgent", "asap", "important", "critical", "deadline", "immediately", "emergency"],
    low_priority: &["someday", "maybe", "later", "optional", "when possible", "whenever"],
    suggestions: Suggestions {
        positive: [
            "Sounds like a nice one, enjoy it!",
            "Great plan. Keep the momentum going.",
            "Something to look forward to.",
        ],
        negative: [
            "Looks stressful. Break it into smaller steps.",
            "Tackle this one first while you are fresh.",
            "Set a reminder so it does not slip.",
        ],
        neutral: [
            "Add a time so it lands in your day.",
            "A routine task. Batch it with similar ones.",
            "Consider a due date to keep it on track.",
        ],
    },
};

static RU: Lexicon = Lexicon {
    positive: &[
        KeywordPattern {
            words: &["отлично", "радост", "люблю", "счаст", "праздн", "весел", "прекрасн"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["хорош", "приятн", "отдых", "подарок", "день рождения", "отпуск"],
            weight: 1.0,
        },
    ],
    negative: &[
        KeywordPattern {
            words: &["срочно", "критич", "авари", "проблем", "сломал", "ошибк", "баг", "не работает", "устал", "плохо", "стресс"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["опазд", "просроч", "сложн", "болит", "болез", "исправ", "тревог"],
            weight: 1.0,
        },
    ],
    neutral: &[KeywordPattern {
        words: &["встреча", "звонок", "позвонить", "купить", "проверить", "сделать", "нужно", "отправить", "план"],
        weight: 1.0,
    }],
    urgency: &["срочно", "немедленно", "сейчас", "сегодня", "быстрее", "дедлайн"],
    intensity: &["очень", "крайне", "совсем", "сильно"],
    categories: &[
        CategoryWords {
            category: Category::Work,
            words: &["работ", "встреч", "отчет", "отчёт", "проект", "клиент", "офис", "баг", "презентац", "совещан", "коллег", "начальник", "дедлайн"],
        },
        CategoryWords {
            category: Category::Study,
            words: &["учеб", "учёб", "экзамен", "домашн", "лекци", "курс", "урок", "универ", "школ", "сессия", "реферат"],
        },
        CategoryWords {
            category: Category::Transport,
            words: &["машин", "автобус", "поезд", "такси", "метро", "бензин", "самолет", "самолёт", "билет", "парковк", "аэропорт"],
        },
        CategoryWords {
            category: Category::Home,
            words: &["дом", "уборк", "убрать", "готов", "продукт", "купить", "стирк", "посуд", "ремонт", "квартир"],
        },
        CategoryWords {
            category: Category::Health,
            words: &["врач", "доктор", "спортзал", "тренировк", "лекарств", "таблетк", "больниц", "здоров", "стоматолог", "йога"],
        },
    ],
    duration: DurationWords {
        very_quick: &["позвонить", "звонок", "написать", "ответить", "оплатить", "быстро", "проверить"],
        quick: &["купить", "магазин", "продукт", "почт", "письмо", "прочитать", "помыть"],
        medium: &["встреч", "приготовить", "уборк", "тренировк", "врач", "совещан"],
        long: &["проект", "презентац", "экзамен", "отчет", "отчёт", "ремонт", "поездк"],
        very_long: &["переезд", "весь день", "конференц", "диплом", "марафон"],
        complexity: &["сложн", "трудн", "подробн", "большой", "тщательн"],
        simplicity: &["прост", "легк", "лёгк", "небольш", "мелк"],
    },
    high_priority: &["срочно", "важно", "критич", "немедленно", "дедлайн", "авари"],
    low_priority: &["когда-нибудь", "может быть", "потом", "необязательно", "по возможности"],
    suggestions: Suggestions {
        positive: [
            "Звучит приятно, наслаждайтесь!",
            "Отличный план, так держать.",
            "Будет чего ждать.",
        ],
        negative: [
            "Похоже на стресс. Разбейте задачу на шаги.",
            "Возьмитесь за это первым делом.",
            "Поставьте напоминание, чтобы не упустить.",
        ],
        neutral: [
            "Добавьте время, чтобы задача попала в план дня.",
            "Обычная задача. Сгруппируйте её с похожими.",
            "Назначьте срок, чтобы не откладывать.",
        ],
    },
};

static KZ: Lexicon = Lexicon {
    positive: &[
        KeywordPattern {
            words: &["керемет", "қуаныш", "жақсы көремін", "бақыт", "мереке", "тамаша"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["жақсы", "демалыс", "сыйлық", "туған күн"],
            weight: 1.0,
        },
    ],
    negative: &[
        KeywordPattern {
            words: &["шұғыл", "апат", "мәселе", "сынды", "қате", "жұмыс істемейді", "шаршадым", "жаман"],
            weight: 2.0,
        },
        KeywordPattern {
            words: &["кешіктім", "мерзімі өтті", "қиын", "ауырады", "ауру", "түзету"],
            weight: 1.0,
        },
    ],
    neutral: &[KeywordPattern {
        words: &["кездесу", "қоңырау", "сатып алу", "тексеру", "жасау", "керек", "жіберу", "жоспар"],
        weight: 1.0,
    }],
    urgency: &["шұғыл", "дереу", "қазір", "бүгін"],
    intensity: &["өте", "тым", "қатты"],
    categories: &[
        CategoryWords {
            category: Category::Work,
            words: &["жұмыс", "кездесу", "есеп", "жоба", "клиент", "кеңсе", "презентация", "әріптес", "бастық"],
        },
        CategoryWords {
            category: Category::Study,
            words: &["оқу", "емтихан", "дәріс", "курс", "сабақ", "университет", "мектеп"],
        },
        CategoryWords {
            category: Category::Transport,
            words: &["көлік", "автобус", "пойыз", "такси", "метро", "бензин", "ұшақ", "билет", "әуежай"],
        },
        CategoryWords {
            category: Category::Home,
            words: &["үй", "тазалау", "тамақ", "азық", "сатып алу", "кір жуу", "ыдыс", "жөндеу", "пәтер"],
        },
        CategoryWords {
            category: Category::Health,
            words: &["дәрігер", "спортзал", "жаттығу", "дәрі", "аурухана", "денсаулық", "тіс", "йога"],
        },
    ],
    duration: DurationWords {
        very_quick: &["қоңырау", "жауап", "төлеу", "тексеру"],
        quick: &["сатып алу", "дүкен", "хат", "оқып шығу", "жуу"],
        medium: &["кездесу", "тамақ", "тазалау", "жаттығу", "дәрігер"],
        long: &["жоба", "презентация", "емтихан", "есеп", "жөндеу", "сапар"],
        very_long: &["көшу", "күні бойы", "конференция", "диплом", "марафон"],
        complexity: &["күрделі", "қиын", "толық", "үлкен"],
        simplicity: &["қарапайым", "оңай", "кішкене", "шағын"],
    },
    high_priority: &["шұғыл", "маңызды", "дереу"],
    low_priority: &["бір кезде", "мүмкін", "кейін", "міндетті емес"],
    suggestions: Suggestions {
        positive: [
            "Тамаша көрінеді, рахаттаныңыз!",
            "Жақсы жоспар, осылай жалғастырыңыз.",
            "Асыға күтетін нәрсе.",
        ],
        negative: [
            "Күрделі сияқты. Кішкене қадамдарға бөліңіз.",
            "Мұны бірінші орындаңыз.",
            "Ұмытпау үшін еске салғыш қойыңыз.",
        ],
        neutral: [
            "Күніңізге қосу үшін уақыт белгілеңіз.",
            "Күнделікті тапсырма. Ұқсастарымен бірге орындаңыз.",
            "Мерзім белгілеңіз.",
        ],
    },
};
