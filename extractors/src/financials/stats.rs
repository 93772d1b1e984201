//! Currency aggregation, fixed-rate USD conversion, and display formatting.

use shared_types::{CurrencyMatch, CurrencyStats, ExtractedFinancials};

use super::currency::CompiledCurrency;

/// Convert one match to USD using the fixed illustrative rate table.
/// Unknown codes get rate 1, i.e. are treated as already-USD.
pub(crate) fn convert_to_usd(currencies: &[CompiledCurrency], found: &CurrencyMatch) -> f64 {
    let rate = currencies
        .iter()
        .find(|currency| currency.code == found.code)
        .map(|currency| currency.usd_rate)
        .unwrap_or(1.0);
    found.amount * rate
}

/// Aggregate currency usage over one extraction result. Counts are kept in
/// first-appearance order so the primary-currency tie break is stable: a
/// later code must strictly exceed the current best to take over.
pub(crate) fn currency_statistics(
    currencies: &[CompiledCurrency],
    financials: &ExtractedFinancials,
) -> CurrencyStats {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for found in &financials.currencies {
        match counts.iter_mut().find(|(code, _)| *code == found.code) {
            Some((_, count)) => *count += 1,
            None => counts.push((found.code.as_str(), 1)),
        }
    }

    let mut primary: Option<(&str, usize)> = None;
    for &(code, count) in &counts {
        match primary {
            Some((_, best)) if count <= best => {}
            _ => primary = Some((code, count)),
        }
    }

    let total_value_usd = financials
        .currencies
        .iter()
        .map(|found| convert_to_usd(currencies, found))
        .sum();

    CurrencyStats {
        total_currencies: counts.len() as i32,
        primary_currency: primary.map(|(code, _)| code.to_string()),
        total_value_usd,
        has_mixed_currencies: counts.len() > 1,
    }
}

/// Locale-style display string for one match: grouped thousands, two
/// decimals only when the amount is fractional. The symbol is prefixed for
/// USD and EUR and suffixed for every other currency.
pub fn format_currency(found: &CurrencyMatch) -> String {
    let amount = group_thousands(found.amount);
    match found.code.as_str() {
        "USD" | "EUR" => format!("{}{}", found.symbol, amount),
        _ => format!("{} {}", amount, found.symbol),
    }
}

fn group_thousands(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    if fraction == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, fraction)
    }
}
