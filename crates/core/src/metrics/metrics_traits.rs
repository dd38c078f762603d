use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A record that counts toward spending: purchases, bills, and the
/// backend's per-day expense points.
pub trait ExpenseEntry {
    fn category(&self) -> &str;

    /// The day the expense is attributed to, if known.
    fn expense_date(&self) -> Option<NaiveDate>;

    /// The amount the expense contributes to totals.
    fn expense_amount(&self) -> Decimal;
}
