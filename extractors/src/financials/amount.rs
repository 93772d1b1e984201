//! Numeric normalization for amounts with ambiguous thousands/decimal
//! separators ("1 000 000", "1.234,56", "12,50").

/// Parse the leading digit run of `raw` into a float. Best-effort: any
/// failure yields 0.0, never an error.
///
/// Whitespace is always a thousands-grouping artifact. A single comma with
/// at most two trailing digits is a decimal separator; every other comma is
/// a thousands separator.
pub fn parse_amount(raw: &str) -> f64 {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    let run: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || c.is_whitespace() || *c == ',' || *c == '.')
        .collect();
    let cleaned: String = run.chars().filter(|c| !c.is_whitespace()).collect();

    let normalized = if cleaned.contains(',') {
        let parts: Vec<&str> = cleaned.split(',').collect();
        if parts.len() == 2 && parts[1].len() <= 2 {
            // decimal comma; periods in the integer part are thousands separators
            format!("{}.{}", parts[0].replace('.', ""), parts[1])
        } else {
            cleaned.replace(',', "")
        }
    } else {
        cleaned
    };

    normalized.parse().unwrap_or(0.0)
}
