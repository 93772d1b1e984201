use anyhow::Context;
use clap::Parser;
use extractors::{format_currency, FinancialDataExtractor};
use shared_types::{ExtractedFinancials, ExtractionError};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract financial data from procurement documents", long_about = None)]
struct Args {
    /// Document to scan; reads stdin when omitted
    file: Option<PathBuf>,

    /// Print the raw extraction result as JSON
    #[arg(long)]
    json: bool,

    /// Maximum accepted document size in bytes
    #[arg(long, default_value_t = 1_048_576)]
    max_length: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    enforce_max_length(&text, args.max_length)?;

    let extractor = FinancialDataExtractor::new();
    let financials = extractor.extract_financial_data(&text);
    tracing::debug!(
        currencies = financials.currencies.len(),
        terms = financials.payment_terms.len(),
        notes = financials.financial_notes.len(),
        "extraction finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&financials)?);
    } else {
        print_report(&extractor, &financials);
    }

    Ok(())
}

/// The engine itself has no size guard; the calling layer rejects
/// over-length documents before invoking it
fn enforce_max_length(text: &str, max_length: usize) -> Result<(), ExtractionError> {
    if text.len() > max_length {
        return Err(ExtractionError::InvalidInput(format!(
            "document is {} bytes, over the {} byte limit",
            text.len(),
            max_length
        )));
    }
    Ok(())
}

fn print_report(extractor: &FinancialDataExtractor, financials: &ExtractedFinancials) {
    match &financials.total_budget {
        Some(total) => println!("Total budget: {}", format_currency(total)),
        None => println!("Total budget: not found"),
    }

    if !financials.cost_breakdown.categories.is_empty() {
        println!("\nCost breakdown:");
        let mut entries: Vec<_> = financials.cost_breakdown.categories.iter().collect();
        entries.sort_by(|a, b| b.1.amount.total_cmp(&a.1.amount));
        for (category, found) in entries {
            println!("  {:?}: {}", category, format_currency(found));
        }
    }
    if !financials.cost_breakdown.other.is_empty() {
        println!("\nOther amounts:");
        for found in &financials.cost_breakdown.other {
            println!("  {}", format_currency(found));
        }
    }

    if !financials.payment_terms.is_empty() {
        println!("\nPayment terms:");
        for term in &financials.payment_terms {
            println!("  - {}", term);
        }
    }

    if !financials.financial_notes.is_empty() {
        println!("\nFinancial notes:");
        for note in &financials.financial_notes {
            println!("  - {}", note);
        }
    }

    let stats = extractor.currency_statistics(financials);
    println!(
        "\n{} currency mentions across {} currencies, ${:.2} total at fixed rates",
        financials.currencies.len(),
        stats.total_currencies,
        stats.total_value_usd
    );
    if let Some(code) = &stats.primary_currency {
        println!("Primary currency: {}", code);
    }
}
