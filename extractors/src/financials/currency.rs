//! Currency locator: scans the document once per configured currency and
//! produces position-tagged matches, de-duplicated by start offset.

use regex::Regex;
use shared_types::CurrencyMatch;
use std::collections::HashSet;

use super::amount::parse_amount;

/// A currency rule with its pattern compiled, ready for scanning
pub(crate) struct CompiledCurrency {
    pub code: String,
    pub symbol: String,
    pub name: String,
    pub regex: Regex,
    pub usd_rate: f64,
}

/// Scan `text` with every currency in configuration order. A start offset is
/// claimed by at most one currency (first claimer wins); matches whose
/// normalized amount is 0 are noise and never surfaced. Output is sorted
/// ascending by position.
pub(crate) fn locate_currencies(currencies: &[CompiledCurrency], text: &str) -> Vec<CurrencyMatch> {
    let mut claimed: HashSet<usize> = HashSet::new();
    let mut matches = Vec::new();

    for currency in currencies {
        for found in currency.regex.find_iter(text) {
            if claimed.contains(&found.start()) {
                continue;
            }

            let amount = parse_amount(found.as_str());
            if amount == 0.0 {
                continue;
            }

            claimed.insert(found.start());
            matches.push(CurrencyMatch {
                code: currency.code.clone(),
                symbol: currency.symbol.clone(),
                name: currency.name.clone(),
                amount,
                original_text: found.as_str().to_string(),
                position: found.start(),
            });
        }
    }

    matches.sort_by_key(|m| m.position);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::FinancialDataExtractor;

    fn locate(text: &str) -> Vec<CurrencyMatch> {
        let extractor = FinancialDataExtractor::new();
        locate_currencies(&extractor.currencies, text)
    }

    #[test]
    fn test_som_suffix_form() {
        let matches = locate("Стоимость работ: 50000 сом по договору");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].code, "KGS");
        assert_eq!(matches[0].amount, 50000.0);
    }

    #[test]
    fn test_positions_strictly_increasing_and_unique() {
        let matches = locate("Аванс 1000 сом, затем 2500 сом, всего оплачено 500 USD");
        assert_eq!(matches.len(), 3);
        for pair in matches.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn test_case_insensitive_names() {
        let matches = locate("Budget of 1200 Usd and 300 ЕВРО");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].code, "USD");
        assert_eq!(matches[1].code, "EUR");
    }

    #[test]
    fn test_zero_amount_discarded() {
        assert!(locate("доплата 0 сом").is_empty());
    }

    #[test]
    fn test_no_currency_tag_no_match() {
        assert!(locate("в течение 30 дней после поставки").is_empty());
    }

    #[test]
    fn test_spaced_thousands_inside_match() {
        let matches = locate("итоговая сумма 1 250 000 сом");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].amount, 1_250_000.0);
    }

    #[test]
    fn test_offset_claimed_by_first_currency_in_config_order() {
        let patterns = vec![
            shared_types::CurrencyPattern {
                code: "CRA".to_string(),
                symbol: "cr".to_string(),
                name: "Credit A".to_string(),
                pattern: r"(?i)\d+\s*cr\b".to_string(),
                usd_rate: 1.0,
            },
            shared_types::CurrencyPattern {
                code: "CRB".to_string(),
                symbol: "cr".to_string(),
                name: "Credit B".to_string(),
                pattern: r"(?i)\d+\s*cr\b".to_string(),
                usd_rate: 2.0,
            },
        ];
        let extractor = FinancialDataExtractor::from_patterns(patterns).unwrap();
        let matches = locate_currencies(&extractor.currencies, "balance 500 cr");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].code, "CRA");
    }
}
