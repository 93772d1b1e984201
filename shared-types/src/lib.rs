pub mod extraction;
pub mod financial;

pub use extraction::{ExtractionError, ExtractionInput, ExtractionMethod, Extractor};
pub use financial::{
    CostBreakdown, CostCategory, CurrencyMatch, CurrencyPattern, CurrencyStats,
    ExtractedFinancials,
};
