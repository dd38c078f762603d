use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DEFAULT_CURRENCY_LABEL;

/// Formats an amount as `"<label> 1,234.50"`.
///
/// Computation functions return raw decimals; this is only for callers that
/// render text.
pub fn format_currency(value: Decimal, label: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{} {}{}.{}", label, sign, group_thousands(whole), fraction)
}

/// Formats an amount in the dashboard currency, e.g. `"EGP 20,000.00"`.
pub fn format_money(value: Decimal) -> String {
    format_currency(value, DEFAULT_CURRENCY_LABEL)
}

/// Formats a percentage with one decimal place, e.g. `"80.0%"`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
