//! Short human summary of a task list, in the list's language.

use super::{Category, ListAnalysis, Sentiment, SupportedLanguage, dominant};

const CATEGORY_ORDER: [Category; 6] = [
    Category::Work,
    Category::Study,
    Category::Transport,
    Category::Home,
    Category::Health,
    Category::General,
];

fn hours_minutes(total: u64) -> (u64, u64) {
    (total / 60, total % 60)
}

fn mood(a: &ListAnalysis) -> Sentiment {
    let s = a.sentiments;
    if s.negative > s.positive && s.negative >= s.neutral {
        Sentiment::Negative
    } else if s.positive > s.negative && s.positive >= s.neutral {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

pub(super) fn render(a: &ListAnalysis) -> String {
    use SupportedLanguage::*;

    let lang = a.language;
    if a.total == 0 {
        return match lang {
            En => "No tasks yet.".to_string(),
            Ru => "Задач пока нет.".to_string(),
            Kz => "Әзірге тапсырма жоқ.".to_string(),
        };
    }

    let (h, m) = hours_minutes(a.pending_minutes);
    let top = dominant(&a.categories, &CATEGORY_ORDER)
        .unwrap_or(Category::General)
        .label(lang);

    let tone = match (lang, mood(a)) {
        (En, Sentiment::Negative) => "Several tasks look stressful; start with the urgent ones.",
        (En, Sentiment::Positive) => "Looks like a good stretch ahead.",
        (En, Sentiment::Neutral) => "Mostly routine work.",
        (Ru, Sentiment::Negative) => "Несколько задач выглядят напряжёнными, начните со срочных.",
        (Ru, Sentiment::Positive) => "Впереди приятные дела.",
        (Ru, Sentiment::Neutral) => "В основном рутинные дела.",
        (Kz, Sentiment::Negative) => "Бірнеше тапсырма қиын көрінеді, шұғылдарынан бастаңыз.",
        (Kz, Sentiment::Positive) => "Алда жағымды істер бар.",
        (Kz, Sentiment::Neutral) => "Көбіне күнделікті істер.",
    };

    match lang {
        En => format!(
            "{} tasks, {} done, {} pending (~{}h {}m left). Most common: {}. {}",
            a.total, a.completed, a.pending, h, m, top, tone
        ),
        Ru => format!(
            "Задач: {}, выполнено: {}, осталось: {} (~{} ч {} мин). Чаще всего: {}. {}",
            a.total, a.completed, a.pending, h, m, top, tone
        ),
        Kz => format!(
            "Тапсырмалар: {}, орындалды: {}, қалды: {} (~{} сағ {} мин). Жиі кездесетіні: {}. {}",
            a.total, a.completed, a.pending, h, m, top, tone
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::{HeuristicClassifier, SupportedLanguage};
    use crate::task::TaskInput;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_english_summary_mentions_counts() {
        let tasks = vec![
            TaskInput::new("1", "Prepare the project report", false),
            TaskInput::new("2", "Email the client", true),
        ];
        let r = HeuristicClassifier::default()
            .analyze_list_with_rng(&tasks, &mut StdRng::seed_from_u64(9));
        assert_eq!(r.language, SupportedLanguage::En);
        assert!(r.summary.starts_with("2 tasks, 1 done, 1 pending"), "{}", r.summary);
        assert!(r.summary.contains("Most common: work."), "{}", r.summary);
    }

    #[test]
    fn test_empty_summary() {
        let r = HeuristicClassifier::default().analyze_list(&[]);
        assert_eq!(r.summary, "No tasks yet.");
    }
}
