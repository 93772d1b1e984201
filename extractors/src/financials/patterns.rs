//! Static configuration tables: currency matching rules, cost category
//! keywords, budget keyword priorities, and clause patterns. Built once in
//! the extractor constructor; never mutated afterwards.

use regex::Regex;
use shared_types::{CostCategory, CurrencyPattern};

/// One cost category with its ordered bilingual keyword synonyms
pub struct CategoryRule {
    pub category: CostCategory,
    pub keywords: &'static [&'static str],
}

/// Builtin currency table. Order matters: when two currencies could claim
/// the same text offset, the one listed first wins.
pub fn create_currency_patterns() -> Vec<CurrencyPattern> {
    vec![
        CurrencyPattern {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            name: "US Dollar".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:\$|usd\b|доллар(?:ов|а|ы)?|долл\.?)"
                .to_string(),
            usd_rate: 1.0,
        },
        CurrencyPattern {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            name: "Euro".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:€|eur\b|евро)".to_string(),
            usd_rate: 1.09,
        },
        CurrencyPattern {
            code: "KGS".to_string(),
            symbol: "сом".to_string(),
            name: "Kyrgyz Som".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:сом(?:ов|а)?\b|kgs\b)".to_string(),
            usd_rate: 0.0115,
        },
        CurrencyPattern {
            code: "RUB".to_string(),
            symbol: "₽".to_string(),
            name: "Russian Ruble".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:₽|rub\b|рубл(?:ей|я|и)|руб\.?)".to_string(),
            usd_rate: 0.011,
        },
        CurrencyPattern {
            code: "KZT".to_string(),
            symbol: "₸".to_string(),
            name: "Kazakh Tenge".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:₸|kzt\b|тенге)".to_string(),
            usd_rate: 0.0021,
        },
        CurrencyPattern {
            code: "GBP".to_string(),
            symbol: "£".to_string(),
            name: "British Pound".to_string(),
            pattern: r"(?i)\d(?:[\d\s.,]*\d)?\s*(?:£|gbp\b|фунт(?:ов|а|ы)?)".to_string(),
            usd_rate: 1.27,
        },
    ]
}

/// Category keyword table. Keywords are lowercase; the categorizer searches
/// a lowercased copy of the document.
pub fn create_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            category: CostCategory::Development,
            keywords: &[
                "разработка",
                "разработку",
                "программирование",
                "development",
                "coding",
            ],
        },
        CategoryRule {
            category: CostCategory::Infrastructure,
            keywords: &[
                "инфраструктура",
                "сервер",
                "хостинг",
                "оборудование",
                "infrastructure",
                "hosting",
            ],
        },
        CategoryRule {
            category: CostCategory::Support,
            keywords: &["поддержка", "сопровождение", "support", "maintenance"],
        },
        CategoryRule {
            category: CostCategory::Testing,
            keywords: &["тестирование", "testing", "qa"],
        },
        CategoryRule {
            category: CostCategory::Deployment,
            keywords: &["внедрение", "развертывание", "запуск", "deployment", "rollout"],
        },
        CategoryRule {
            category: CostCategory::ProjectManagement,
            keywords: &[
                "управление проектом",
                "менеджмент",
                "координация",
                "project management",
                "management",
            ],
        },
        CategoryRule {
            category: CostCategory::Design,
            keywords: &["дизайн", "проектирование", "design", "ui/ux"],
        },
        CategoryRule {
            category: CostCategory::Documentation,
            keywords: &["документация", "обучение", "documentation", "training"],
        },
    ]
}

/// Total-budget keyword phrases, highest priority first. The identifier
/// stops at the first phrase that yields a nearby amount.
pub fn budget_keywords() -> Vec<&'static str> {
    vec![
        "итого",
        "общая стоимость",
        "общая сумма",
        "стоимость проекта",
        "бюджет проекта",
        "total cost",
        "total amount",
        "total budget",
        "project budget",
        "grand total",
        "всего",
        "total",
    ]
}

/// Payment-term clause patterns, applied in order. Each stops at sentence
/// punctuation and is length-bounded to keep backtracking in check.
pub fn create_payment_term_patterns() -> Vec<Regex> {
    [
        r"(?i)предоплат[а-яё]*[^.!?\n]{0,120}",
        r"(?i)аванс[а-яё]*[^.!?\n]{0,120}",
        r"(?i)рассрочк[а-яё]*[^.!?\n]{0,120}",
        r"(?i)оплат[а-яё]*\s+(?:производится|осуществляется|в течение|после|поэтапно|этапами)[^.!?\n]{0,120}",
        r"(?i)\d{1,3}\s*%[^.!?\n]{0,60}?(?:предоплат|оплат|аванс|payment|upfront)[^.!?\n]{0,60}",
        r"(?i)(?:prepayment|advance payment|down payment|upfront payment)[^.!?\n]{0,120}",
        r"(?i)payment\s+(?:terms|schedule|due|within|upon|in\s+installments)[^.!?\n]{0,120}",
        r"(?i)net\s+\d{1,3}\b[^.!?\n]{0,60}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Financial-note clause patterns: tax, discounts, exclusions, conditions,
/// validity windows.
pub fn create_financial_note_patterns() -> Vec<Regex> {
    [
        r"(?i)(?:ндс|налог[а-яё]*|vat\b|tax(?:es)?\b)[^.!?\n]{0,120}",
        r"(?i)(?:скидк[а-яё]*|discount)[^.!?\n]{0,120}",
        r"(?i)(?:не включ[а-яё]*|не входит|не учтен[а-яё]*|excluding|excludes|not included)[^.!?\n]{0,120}",
        r"(?i)(?:при условии|subject to|provided that)[^.!?\n]{0,120}",
        r"(?i)(?:цены действительны|срок действия|valid until|valid through)[^.!?\n]{0,120}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        let extractor_patterns = create_currency_patterns();
        assert_eq!(extractor_patterns.len(), 6);
        for pattern in &extractor_patterns {
            assert!(Regex::new(&pattern.pattern).is_ok(), "bad pattern for {}", pattern.code);
        }
    }

    #[test]
    fn test_usd_listed_before_other_currencies() {
        // USD claims contested offsets first
        assert_eq!(create_currency_patterns()[0].code, "USD");
    }

    #[test]
    fn test_all_eight_categories_present() {
        let rules = create_category_rules();
        assert_eq!(rules.len(), 8);
        for rule in &rules {
            assert!(!rule.keywords.is_empty());
        }
    }
}
