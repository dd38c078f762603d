//! Aggregate expense payloads returned by the backend's summary endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metrics::ExpenseEntry;
use crate::utils::json_utils::{
    amount_from_value, date_from_value, integer_from_value, string_from_value,
};
use crate::utils::time_utils::month_label;

/// One day's spending in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePoint {
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: Decimal,
}

impl ExpensePoint {
    pub fn from_raw(raw: RawExpensePoint) -> Self {
        let amount = raw.amount.as_ref().or(raw.total.as_ref()).or(raw.price.as_ref());
        ExpensePoint {
            date: date_from_value(raw.date.as_ref()),
            category: string_from_value(raw.category.as_ref()).unwrap_or_default(),
            amount: amount_from_value(amount),
        }
    }
}

impl ExpenseEntry for ExpensePoint {
    fn category(&self) -> &str {
        &self.category
    }

    fn expense_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn expense_amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExpensePoint {
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// Spending total for one calendar month, labelled `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    pub month: String,
    pub total: Decimal,
}

impl MonthlyExpense {
    /// Accepts `{year, month, total}` or a preformatted `{month: "2024-04"}`.
    pub fn from_raw(raw: RawMonthlyExpense) -> Self {
        let month_number = integer_from_value(raw.month.as_ref());
        let year = integer_from_value(raw.year.as_ref());
        let month = match (year, month_number) {
            (Some(year), Some(month)) if (1..=12).contains(&month) => {
                month_label(year as i32, month as u32)
            }
            _ => string_from_value(raw.month.as_ref()).unwrap_or_default(),
        };
        let total = raw.total.as_ref().or(raw.amount.as_ref());
        MonthlyExpense {
            month,
            total: amount_from_value(total),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMonthlyExpense {
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub month: Option<Value>,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
}

/// Reads the total-expenses response, which is either a bare number or an
/// object carrying `total`/`totalExpenses`.
pub fn parse_total_expenses(value: &Value) -> Decimal {
    match value {
        Value::Object(map) => amount_from_value(
            map.get("totalExpenses")
                .or_else(|| map.get("total"))
                .or_else(|| map.get("amount")),
        ),
        other => amount_from_value(Some(other)),
    }
}
