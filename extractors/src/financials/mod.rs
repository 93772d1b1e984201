//! Financial data extraction pipeline.
//!
//! Single pass over one document: locate currency-tagged amounts, pick the
//! total budget by keyword proximity, bucket costs into spending categories,
//! and extract payment-term and financial-note clauses. Stateless: every
//! call is a pure function of the input text and the static tables built in
//! the constructor.

mod amount;
mod budget;
mod categories;
mod clauses;
mod currency;
pub mod patterns;
mod stats;

pub use amount::parse_amount;
pub use stats::format_currency;

use chrono::Utc;
use regex::Regex;
use shared_types::{
    CurrencyMatch, CurrencyPattern, CurrencyStats, ExtractedFinancials, ExtractionError,
    ExtractionInput, ExtractionMethod, Extractor,
};

use currency::CompiledCurrency;
use patterns::CategoryRule;

/// The extraction engine. Holds only read-only compiled configuration, so a
/// single instance is safe to share across threads and reuse across calls.
pub struct FinancialDataExtractor {
    pub(crate) currencies: Vec<CompiledCurrency>,
    categories: Vec<CategoryRule>,
    budget_keywords: Vec<&'static str>,
    term_patterns: Vec<Regex>,
    note_patterns: Vec<Regex>,
}

impl FinancialDataExtractor {
    /// Engine with the builtin currency table and keyword sets
    pub fn new() -> Self {
        Self::from_patterns(patterns::create_currency_patterns())
            .expect("builtin currency patterns compile")
    }

    /// Engine with a caller-supplied currency table. The builtin category,
    /// budget-keyword, and clause tables are kept.
    pub fn from_patterns(
        currency_patterns: Vec<CurrencyPattern>,
    ) -> Result<Self, ExtractionError> {
        let mut currencies = Vec::new();

        for pattern in currency_patterns {
            let regex = Regex::new(&pattern.pattern).map_err(|e| {
                ExtractionError::ConfigError(format!(
                    "currency pattern for {}: {}",
                    pattern.code, e
                ))
            })?;

            currencies.push(CompiledCurrency {
                code: pattern.code,
                symbol: pattern.symbol,
                name: pattern.name,
                regex,
                usd_rate: pattern.usd_rate,
            });
        }

        Ok(Self {
            currencies,
            categories: patterns::create_category_rules(),
            budget_keywords: patterns::budget_keywords(),
            term_patterns: patterns::create_payment_term_patterns(),
            note_patterns: patterns::create_financial_note_patterns(),
        })
    }

    /// Run the full pipeline over one document. Never fails: malformed text
    /// degrades to empty sequences and absent optional fields.
    pub fn extract_financial_data(&self, text: &str) -> ExtractedFinancials {
        let currencies = currency::locate_currencies(&self.currencies, text);
        tracing::debug!(matches = currencies.len(), "located currency mentions");

        let total_budget =
            budget::identify_total_budget(&currencies, text, &self.budget_keywords);
        let cost_breakdown = categories::categorize_costs(&currencies, text, &self.categories);
        let payment_terms =
            clauses::extract_clauses(text, &self.term_patterns, clauses::PAYMENT_TERMS);
        let financial_notes =
            clauses::extract_clauses(text, &self.note_patterns, clauses::FINANCIAL_NOTES);

        ExtractedFinancials {
            total_budget,
            currencies,
            payment_terms,
            cost_breakdown,
            financial_notes,
            extracted_at: Utc::now().timestamp(),
        }
    }

    /// Fixed-rate USD conversion for one match; unknown codes use rate 1
    pub fn convert_to_usd(&self, found: &CurrencyMatch) -> f64 {
        stats::convert_to_usd(&self.currencies, found)
    }

    /// Currency usage aggregates for one extraction result
    pub fn currency_statistics(&self, financials: &ExtractedFinancials) -> CurrencyStats {
        stats::currency_statistics(&self.currencies, financials)
    }
}

impl Extractor for FinancialDataExtractor {
    fn extract(&self, input: &ExtractionInput) -> Result<ExtractedFinancials, ExtractionError> {
        Ok(self.extract_financial_data(&input.text))
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::PatternBased
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for FinancialDataExtractor {
    fn default() -> Self {
        Self::new()
    }
}
