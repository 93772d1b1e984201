//! Clause extraction for payment terms and financial notes: ordered pattern
//! sweep with whitespace normalization and near-duplicate suppression.

use regex::Regex;

/// Acceptance thresholds for one clause type
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClausePolicy {
    /// Candidates shorter than this (in characters) are noise
    pub min_len: usize,
    /// Leading-substring length used for near-duplicate suppression
    pub prefix_len: usize,
}

pub(crate) const PAYMENT_TERMS: ClausePolicy = ClausePolicy {
    min_len: 10,
    prefix_len: 20,
};

pub(crate) const FINANCIAL_NOTES: ClausePolicy = ClausePolicy {
    min_len: 15,
    prefix_len: 30,
};

/// Collect clauses across all patterns in pattern-list order, then match
/// order within each pattern. A candidate is dropped when it is too short or
/// when an already-accepted clause contains its leading substring.
pub(crate) fn extract_clauses(text: &str, patterns: &[Regex], policy: ClausePolicy) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::new();

    for pattern in patterns {
        for found in pattern.find_iter(text) {
            let clause = normalize_whitespace(found.as_str());
            if clause.chars().count() < policy.min_len {
                continue;
            }

            let prefix: String = clause.chars().take(policy.prefix_len).collect();
            if accepted.iter().any(|existing| existing.contains(&prefix)) {
                continue;
            }

            accepted.push(clause);
        }
    }

    accepted
}

fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::patterns;

    fn terms(text: &str) -> Vec<String> {
        extract_clauses(text, &patterns::create_payment_term_patterns(), PAYMENT_TERMS)
    }

    fn notes(text: &str) -> Vec<String> {
        extract_clauses(
            text,
            &patterns::create_financial_note_patterns(),
            FINANCIAL_NOTES,
        )
    }

    #[test]
    fn test_prepayment_clause_extracted() {
        let found = terms("Условия: предоплата 30% после подписания договора. Далее по акту.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], "предоплата 30% после подписания договора");
    }

    #[test]
    fn test_whitespace_normalized() {
        let found = terms("Оплата  производится   поэтапно\tв течение 10 дней");
        assert_eq!(found, vec!["Оплата производится поэтапно в течение 10 дней"]);
    }

    #[test]
    fn test_short_candidates_dropped() {
        assert!(terms("Аванс.").is_empty());
    }

    #[test]
    fn test_near_duplicate_suppressed() {
        let text = "Предоплата 50% до начала работ обязательна. \
                    Примечание: Предоплата 50% до начала работ обязательна.";
        let found = terms(text);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_notes_capture_tax_and_discount() {
        let found = notes(
            "Цены указаны без учета НДС и могут быть изменены. \
             Скидка 5% предоставляется при полной предоплате.",
        );
        assert_eq!(found.len(), 2);
        assert!(found[0].starts_with("НДС"));
        assert!(found[1].starts_with("Скидка 5%"));
    }

    #[test]
    fn test_note_minimum_length_is_fifteen() {
        // 14 characters once normalized, below the notes threshold
        assert!(notes("НДС не включен").is_empty());
    }

    #[test]
    fn test_english_payment_terms() {
        let found = terms("Payment terms: net 30 from invoice date. Prepayment of 20% required!");
        assert!(found
            .iter()
            .any(|clause| clause.starts_with("Payment terms")));
        assert!(found.iter().any(|clause| clause.starts_with("Prepayment")));
    }
}
