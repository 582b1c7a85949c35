//! Number formatting for display.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places, half away from zero.
fn round(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Insert thousands separators into a plain decimal string.
fn group_thousands(plain: &str) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Fixed two-decimal string with separators, e.g. `1,234.50`.
fn fixed2(value: f64) -> Option<String> {
    round(value, 2).map(|d| group_thousands(&format!("{:.2}", d)))
}

/// Format a price, e.g. `₹1,234.50`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    match fixed2(value) {
        Some(s) => match s.strip_prefix('-') {
            Some(abs) => format!("-{}{}", symbol, abs),
            None => format!("{}{}", symbol, s),
        },
        None => "N/A".to_string(),
    }
}

/// Whole-unit volume with separators, e.g. `1,234,567`.
pub fn format_volume(value: f64) -> String {
    match round(value, 0) {
        Some(d) => group_thousands(&d.trunc().to_string()),
        None => "N/A".to_string(),
    }
}

/// Signed change with its percentage, e.g. `+12.50 (+1.25%)`.
pub fn format_change(change: f64, change_pct: f64) -> String {
    let signed = |value: f64, text: String| {
        if value >= 0.0 {
            format!("+{}", text)
        } else {
            text
        }
    };
    match (fixed2(change), round(change_pct, 2)) {
        (Some(c), Some(p)) => format!(
            "{} ({}%)",
            signed(change, c),
            signed(change_pct, format!("{:.2}", p))
        ),
        _ => "N/A".to_string(),
    }
}
