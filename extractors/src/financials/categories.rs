//! Cost categorizer: assigns located amounts to spending buckets by
//! keyword proximity.

use shared_types::{CostBreakdown, CostCategory, CurrencyMatch};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::patterns::CategoryRule;

/// Maximum byte distance between a category keyword occurrence and an
/// amount for the two to be considered associated
const CATEGORY_WINDOW: usize = 100;

/// Bucket amounts by keyword proximity. Per category, keywords are tried in
/// listed order and every occurrence of the first productive keyword is
/// visited; repeated assignment keeps the larger amount (retain-maximum).
/// Keywords after the first productive one are not tried. Matches that end
/// up in no category land in the `other` overflow bucket.
pub(crate) fn categorize_costs(
    matches: &[CurrencyMatch],
    text: &str,
    rules: &[CategoryRule],
) -> CostBreakdown {
    let lowered = text.to_lowercase();
    let mut categories: HashMap<CostCategory, CurrencyMatch> = HashMap::new();

    for rule in rules {
        let mut assigned = false;
        for keyword in rule.keywords {
            for (offset, _) in lowered.match_indices(keyword) {
                let Some(candidate) = nearest_in_window(matches, offset) else {
                    continue;
                };
                assigned = true;

                match categories.entry(rule.category) {
                    Entry::Occupied(mut slot) => {
                        if candidate.amount > slot.get().amount {
                            slot.insert(candidate.clone());
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(candidate.clone());
                    }
                }
            }
            if assigned {
                break;
            }
        }
    }

    let used: HashSet<usize> = categories.values().map(|m| m.position).collect();
    let other = matches
        .iter()
        .filter(|m| !used.contains(&m.position))
        .cloned()
        .collect();

    CostBreakdown { categories, other }
}

/// Closest match to `offset` within the proximity window. Ties keep the
/// earlier position, matching the ascending scan order.
fn nearest_in_window(matches: &[CurrencyMatch], offset: usize) -> Option<&CurrencyMatch> {
    let mut best: Option<(&CurrencyMatch, usize)> = None;
    for candidate in matches {
        let distance = candidate.position.abs_diff(offset);
        if distance > CATEGORY_WINDOW {
            continue;
        }
        match best {
            Some((_, closest)) if closest <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::{currency, patterns, FinancialDataExtractor};

    fn categorize(text: &str) -> CostBreakdown {
        let extractor = FinancialDataExtractor::new();
        let matches = currency::locate_currencies(&extractor.currencies, text);
        categorize_costs(&matches, text, &patterns::create_category_rules())
    }

    #[test]
    fn test_assigns_amount_near_category_keyword() {
        let breakdown = categorize("Разработка системы: 45000 сом");
        let development = breakdown.categories.get(&CostCategory::Development).unwrap();
        assert_eq!(development.amount, 45000.0);
        assert!(breakdown.other.is_empty());
    }

    #[test]
    fn test_retain_maximum_on_repeated_keyword() {
        let breakdown =
            categorize("Разработка: 1000 сом. Дополнительная разработка: 5000 сом.");
        let development = breakdown.categories.get(&CostCategory::Development).unwrap();
        assert_eq!(development.amount, 5000.0);
        // the losing candidate overflows into `other`
        assert_eq!(breakdown.other.len(), 1);
        assert_eq!(breakdown.other[0].amount, 1000.0);
    }

    #[test]
    fn test_category_without_nearby_amount_is_absent() {
        let breakdown = categorize(
            "Дизайн обсуждается отдельно и в стоимость текущего этапа не входит. Хостинг: 300 USD",
        );
        assert!(!breakdown.categories.contains_key(&CostCategory::Design));
        let infrastructure = breakdown
            .categories
            .get(&CostCategory::Infrastructure)
            .unwrap();
        assert_eq!(infrastructure.amount, 300.0);
    }

    #[test]
    fn test_unclaimed_matches_go_to_other() {
        let breakdown = categorize("Итого к оплате 77000 сом");
        assert!(breakdown.categories.is_empty());
        assert_eq!(breakdown.other.len(), 1);
        assert_eq!(breakdown.other[0].amount, 77000.0);
    }

    #[test]
    fn test_separate_categories_keep_separate_amounts() {
        let breakdown = categorize(
            "Тестирование: 8000 сом. Дополнительные проверки по чек-листу \
             согласуются с заказчиком заранее. Поддержка и сопровождение: 6000 сом.",
        );
        assert_eq!(
            breakdown.categories.get(&CostCategory::Testing).unwrap().amount,
            8000.0
        );
        assert_eq!(
            breakdown.categories.get(&CostCategory::Support).unwrap().amount,
            6000.0
        );
    }
}
