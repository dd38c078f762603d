//! Overflow-free decimal arithmetic for totals and percentages.
//!
//! `Decimal`'s operators panic on overflow. Anything that adds up or scales
//! amounts from the backend goes through these helpers instead.

use rust_decimal::Decimal;

/// Sums decimals, saturating at `Decimal::MAX`/`Decimal::MIN`.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

/// `part / whole * 100`, saturating on overflow.
///
/// Callers guarantee `whole > 0`; a zero `whole` yields zero.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}
