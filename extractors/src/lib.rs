//! Extractors Crate
//!
//! Heuristic extraction of financial data from unstructured, multilingual
//! procurement text (proposals, quotes, contracts). The engine is a single
//! stateless pipeline: it locates currency-tagged amounts, picks the dominant
//! project budget, buckets costs by keyword proximity, and pulls out payment
//! terms and financial caveats.
//!
//! # Architecture
//!
//! - **Types**: result and configuration types live in the `shared-types` crate
//! - **Implementation**: the extraction pipeline lives in [`financials`]
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::FinancialDataExtractor;
//!
//! let extractor = FinancialDataExtractor::new();
//! let financials = extractor.extract_financial_data("Итого: 50000 сом");
//! ```

pub mod financials;

// Re-export commonly used items
pub use financials::{format_currency, parse_amount, FinancialDataExtractor};

// Re-export the Extractor trait from shared-types for convenience
pub use shared_types::Extractor;
