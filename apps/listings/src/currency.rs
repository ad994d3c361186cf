//! Indonesian-locale (`id-ID`) currency formatting.
//!
//! Grouping uses `.`, the decimal mark is `,`, and the currency prefix is
//! separated from the digits by a non-breaking space: `Rp 1.500.000`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "IDR";
/// Largest fraction digit count the locale formatter accepts.
pub const MAX_FRACTION_DIGITS: u8 = 100;
const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    #[default]
    Currency,
    Decimal,
}

/// Prefix the `id-ID` locale prints for a currency code.
fn currency_prefix(code: &str) -> String {
    match code {
        "IDR" => "Rp".to_string(),
        "USD" => "US$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "JP¥".to_string(),
        other => other.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `amount` with exactly `fraction_digits` decimals (default 0,
/// capped at `MAX_FRACTION_DIGITS`), rounding half away from zero.
pub fn format_currency(
    amount: f64,
    currency: Option<&str>,
    fraction_digits: Option<u8>,
    style: Option<NumberStyle>,
) -> String {
    let digits = usize::from(fraction_digits.unwrap_or(0).min(MAX_FRACTION_DIGITS));
    let style = style.unwrap_or_default();

    if !amount.is_finite() {
        return if amount.is_nan() {
            "NaN".to_string()
        } else if amount > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    // Scaling a huge amount can overflow; `format!` rounds on its own then.
    let scale = 10f64.powi(digits as i32);
    let scaled = amount.abs() * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        amount.abs()
    };
    let negative = amount < 0.0 && rounded != 0.0;

    let fixed = format!("{rounded:.digits$}");
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_thousands(integer);
    if let Some(fraction) = fraction {
        number.push(',');
        number.push_str(fraction);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if style == NumberStyle::Currency {
        out.push_str(&currency_prefix(currency.unwrap_or(DEFAULT_CURRENCY)));
        out.push(NBSP);
    }
    out.push_str(&number);
    out
}
