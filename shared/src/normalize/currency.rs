//! Currency parsing and formatting

use serde_json::Value;

/// Parse an amount from a JSON value.
///
/// Numbers pass through unchanged; strings go through
/// [`parse_currency_str`]; everything else is zero.
pub fn parse_currency(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_currency_str(s),
        _ => 0.0,
    }
}

/// Parse a currency-formatted string such as `"AED 1,200.50"`.
///
/// Every character other than digits, `.` and `-` is dropped, then the
/// longest numeric prefix is read (`"1.2.3"` reads as `1.2`). Returns 0
/// when nothing numeric remains.
pub fn parse_currency_str(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric_prefix(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Longest `-?digits(.digits)?` prefix with at least one digit
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            digits += 1;
        }
        end = frac_end;
    }

    (digits > 0).then(|| &s[..end])
}

/// Format an amount as `AED 1,234.50`
pub fn format_aed(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("AED {sign}{grouped}.{frac_part}")
}
