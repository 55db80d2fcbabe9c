//! Money helpers: price parsing, minor-unit normalization and display formatting

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Prefix used on every displayed amount
pub const CURRENCY_PREFIX: &str = "Php";

/// Digits kept after the decimal point
pub const MINOR_UNIT_DIGITS: u32 = 2;

/// Round to the currency minor unit (half away from zero)
pub fn normalize(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MINOR_UNIT_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNIT_DIGITS);
    rounded
}

/// Parse a non-negative amount as entered or stored ("120", "99.5", "1,250.00").
///
/// Returns `None` for negative, empty or unparsable input.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&cleaned).ok()?;
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    Some(value)
}

/// Convert a float coming from JSON into an exact decimal
pub fn from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Decimal::try_from(value).ok()
}

/// Formats an amount with 2 decimals and comma thousands separators
///
/// # Examples
///
/// ```
/// use contracts::shared::money::format_amount;
/// use rust_decimal::Decimal;
/// assert_eq!(format_amount(Decimal::new(123450, 2)), "1,234.50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let formatted = normalize(value).to_string();

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (formatted, None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats an amount for display: "Php 1,234.50"
pub fn format_money(value: Decimal) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_amount(value))
}
