//! Lenient readers for loosely typed JSON fields.
//!
//! The backend is not consistent about numbers: prices arrive as numbers,
//! numeric strings, `null`, or not at all. These helpers are the single place
//! where such values are coerced, so record models can stay strictly typed.

use std::str::FromStr;

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::constants::MAX_AMOUNT;
use crate::utils::time_utils::parse_record_date;

/// Reads a decimal from a JSON number or numeric string.
pub fn decimal_from_value(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => {
            let text = text.trim();
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .ok()
        }
        _ => None,
    }
}

/// Reads a money amount, defaulting to zero and clamped to `[0, MAX_AMOUNT]`.
pub fn amount_from_value(value: Option<&Value>) -> Decimal {
    let amount = decimal_from_value(value)
        .map(|amount| amount.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO);
    if amount > MAX_AMOUNT {
        warn!("[Records] Amount {} exceeds the supported maximum; clamped", amount);
        return MAX_AMOUNT;
    }
    amount
}

/// Reads an integer from a JSON number or numeric string.
///
/// Fractional numbers are truncated toward zero.
pub fn integer_from_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Reads a string, accepting numbers as their textual form.
pub fn string_from_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Reads a record date from a string field; anything unparseable is `None`.
pub fn date_from_value(value: Option<&Value>) -> Option<NaiveDate> {
    string_from_value(value).as_deref().and_then(parse_record_date)
}

/// Reads a boolean, accepting `"true"`/`"false"` and 0/1.
pub fn bool_from_value(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => number.as_i64().map(|n| n != 0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_decimal_from_value_variants() {
        assert_eq!(decimal_from_value(Some(&json!(12.5))), Some(dec!(12.5)));
        assert_eq!(decimal_from_value(Some(&json!("400.00"))), Some(dec!(400)));
        assert_eq!(decimal_from_value(Some(&json!(" 7 "))), Some(dec!(7)));
        assert_eq!(decimal_from_value(Some(&json!("abc"))), None);
        assert_eq!(decimal_from_value(Some(&json!(null))), None);
        assert_eq!(decimal_from_value(None), None);
    }

    #[test]
    fn test_amount_from_value_defaults_and_clamps() {
        assert_eq!(amount_from_value(None), Decimal::ZERO);
        assert_eq!(amount_from_value(Some(&json!("n/a"))), Decimal::ZERO);
        assert_eq!(amount_from_value(Some(&json!(-20))), Decimal::ZERO);
        assert_eq!(amount_from_value(Some(&json!(288))), dec!(288));
    }

    #[test]
    fn test_amount_from_value_caps_huge_amounts() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000));
        let huge = json!("79228162514264337593543950335");
        assert_eq!(amount_from_value(Some(&huge)), MAX_AMOUNT);
        assert_eq!(amount_from_value(Some(&json!("1000000000000"))), MAX_AMOUNT);
    }

    #[test]
    fn test_integer_from_value() {
        assert_eq!(integer_from_value(Some(&json!(3))), Some(3));
        assert_eq!(integer_from_value(Some(&json!(2.9))), Some(2));
        assert_eq!(integer_from_value(Some(&json!("4"))), Some(4));
        assert_eq!(integer_from_value(Some(&json!("four"))), None);
        assert_eq!(integer_from_value(Some(&json!([1]))), None);
    }

    #[test]
    fn test_string_and_bool_readers() {
        assert_eq!(string_from_value(Some(&json!(15))), Some("15".to_string()));
        assert_eq!(string_from_value(Some(&json!(null))), None);
        assert_eq!(bool_from_value(Some(&json!("TRUE"))), Some(true));
        assert_eq!(bool_from_value(Some(&json!(0))), Some(false));
        assert_eq!(bool_from_value(Some(&json!({}))), None);
    }

    #[test]
    fn test_date_from_value() {
        assert_eq!(
            date_from_value(Some(&json!("2024-05-01T08:00:00"))),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(date_from_value(Some(&json!(20240501))), None);
        assert_eq!(date_from_value(Some(&json!(null))), None);
    }
}
