//! Budget identifier: picks the single amount that best represents the
//! total project cost.

use shared_types::CurrencyMatch;

/// Maximum byte distance between a budget keyword and an amount for the two
/// to be considered associated
const BUDGET_WINDOW: usize = 200;

/// Select the total-budget amount. Keyword phrases are tried in priority
/// order (not text order); the first phrase with an amount inside the
/// proximity window wins, taking the first such amount in locator order.
/// With no keyword hit the globally largest amount is returned — amounts in
/// different currencies are compared without unit normalization, a known
/// limitation of the heuristic.
pub(crate) fn identify_total_budget(
    matches: &[CurrencyMatch],
    text: &str,
    keywords: &[&str],
) -> Option<CurrencyMatch> {
    if matches.is_empty() {
        return None;
    }

    let lowered = text.to_lowercase();
    for keyword in keywords {
        if let Some(offset) = lowered.find(keyword) {
            for candidate in matches {
                if candidate.position.abs_diff(offset) <= BUDGET_WINDOW {
                    return Some(candidate.clone());
                }
            }
        }
    }

    let mut best = &matches[0];
    for candidate in &matches[1..] {
        if candidate.amount > best.amount {
            best = candidate;
        }
    }
    Some(best.clone())
}
