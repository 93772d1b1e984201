use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// A single currency-tagged amount detected in the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct CurrencyMatch {
    /// ISO-style currency code ('USD', 'KGS', ...)
    pub code: String,
    pub symbol: String,
    pub name: String,
    /// Normalized amount, always >= 0
    pub amount: f64,
    /// The matched text as it appeared in the document
    pub original_text: String,
    /// Zero-based byte offset of the match start; identity key for
    /// de-duplication and proximity comparisons
    pub position: usize,
}

/// Matching rule for one supported currency. Table order is the
/// configuration iteration order: when two currencies could claim the same
/// text offset, the one listed first wins.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CurrencyPattern {
    pub code: String,
    pub symbol: String,
    pub name: String,
    /// Regex source: numeric run, optional whitespace, then one of the
    /// currency's symbol/name variants
    pub pattern: String,
    /// Fixed illustrative conversion rate to USD, not a live rate
    pub usd_rate: f64,
}

/// Fixed set of spending buckets assigned by keyword proximity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum CostCategory {
    Development,
    Infrastructure,
    Support,
    Testing,
    Deployment,
    ProjectManagement,
    Design,
    Documentation,
}

/// Per-category cost assignments plus the overflow bucket for matches
/// no category claimed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct CostBreakdown {
    /// Single highest-value match per category; a category that never
    /// found a proximity match is absent
    pub categories: HashMap<CostCategory, CurrencyMatch>,
    pub other: Vec<CurrencyMatch>,
}

/// Everything extracted from one document. Produced fresh per extraction
/// call; `extracted_at` is provenance only and excluded from equality.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ExtractedFinancials {
    pub total_budget: Option<CurrencyMatch>,
    /// All detected matches, ascending by position
    pub currencies: Vec<CurrencyMatch>,
    pub payment_terms: Vec<String>,
    pub cost_breakdown: CostBreakdown,
    pub financial_notes: Vec<String>,
    /// Unix timestamp of the extraction run
    pub extracted_at: i64,
}

/// Aggregated currency usage for one extraction result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct CurrencyStats {
    pub total_currencies: i32,
    /// Code with the highest mention count, if any matches exist
    pub primary_currency: Option<String>,
    /// Sum over every detected mention converted at the fixed rate table;
    /// may double-count a total that is also itemized elsewhere
    pub total_value_usd: f64,
    pub has_mixed_currencies: bool,
}
