use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the extraction result types
    let mut types = Vec::new();

    types.push(clean_type(CurrencyMatch::export_to_string()?));
    types.push(clean_type(CurrencyPattern::export_to_string()?));
    types.push(clean_type(CostCategory::export_to_string()?));
    types.push(clean_type(CostBreakdown::export_to_string()?));
    types.push(clean_type(ExtractedFinancials::export_to_string()?));
    types.push(clean_type(CurrencyStats::export_to_string()?));

    // Extraction seam types
    types.push(clean_type(ExtractionMethod::export_to_string()?));
    types.push(clean_type(ExtractionInput::export_to_string()?));

    // Output lives inside the workspace; frontend builds copy it from here
    let output_dir = Path::new("bindings");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            // Keep import lines if they're part of a type definition
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
