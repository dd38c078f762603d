//! Monthly bill domain models.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ValidationError};
use crate::filters::Searchable;
use crate::metrics::ExpenseEntry;
use crate::utils::json_utils::{
    amount_from_value, date_from_value, integer_from_value, string_from_value,
};
use crate::utils::time_utils::billing_months_between;

/// A recurring monthly bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBillRecord {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    pub category: String,
    pub amount: Decimal,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Billing duration in months, always at least one.
    pub duration: u32,
}

impl MonthlyBillRecord {
    /// Builds a bill from the API payload.
    ///
    /// Fails when both dates are present and the end precedes the start.
    /// A missing or non-positive duration is derived from the date span.
    pub fn from_raw(raw: RawMonthlyBillRecord) -> Result<Self> {
        let start_date = date_from_value(raw.start_date.as_ref());
        let end_date = date_from_value(raw.end_date.as_ref());
        validate_date_range(start_date, end_date)?;

        let duration = integer_from_value(raw.duration.as_ref())
            .filter(|months| *months >= 1)
            .map(|months| months.min(u32::MAX as i64) as u32)
            .unwrap_or_else(|| match (start_date, end_date) {
                (Some(start), Some(end)) => billing_months_between(start, end),
                _ => 1,
            });

        Ok(MonthlyBillRecord {
            id: integer_from_value(raw.id.as_ref()).unwrap_or_default(),
            name: string_from_value(raw.name.as_ref()).unwrap_or_default(),
            issuer: string_from_value(raw.issuer.as_ref()).unwrap_or_default(),
            category: string_from_value(raw.category.as_ref()).unwrap_or_default(),
            amount: amount_from_value(raw.amount.as_ref()),
            start_date,
            end_date,
            duration,
        })
    }

    /// Total owed over the whole billing duration.
    pub fn total_over_duration(&self) -> Decimal {
        self.amount.saturating_mul(Decimal::from(self.duration))
    }

    /// Whether the bill is billed in the month containing `day`.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        let started = self.start_date.map_or(true, |start| start <= day);
        let not_ended = self.end_date.map_or(true, |end| day <= end);
        started && not_ended
    }
}

impl ExpenseEntry for MonthlyBillRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn expense_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    fn expense_amount(&self) -> Decimal {
        self.amount
    }
}

impl Searchable for MonthlyBillRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.issuer.as_str()]
    }
}

/// Bill exactly as the backend returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMonthlyBillRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "billName")]
    pub name: Option<Value>,
    #[serde(default)]
    pub issuer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub start_date: Option<Value>,
    #[serde(default)]
    pub end_date: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
}

/// Normalizes a bill list, skipping records that violate the date invariant.
pub fn parse_bills(raw_bills: Vec<RawMonthlyBillRecord>) -> Vec<MonthlyBillRecord> {
    raw_bills
        .into_iter()
        .filter_map(|raw| match MonthlyBillRecord::from_raw(raw) {
            Ok(bill) => Some(bill),
            Err(e) => {
                warn!("[Bills] Skipping invalid bill: {}", e);
                None
            }
        })
        .collect()
}

/// Form state for the "add bill" and "edit bill" views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    pub id: Option<i64>,
    pub name: String,
    pub issuer: String,
    pub category: String,
    pub amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration: Option<u32>,
}

impl BillDraft {
    pub fn from_record(record: &MonthlyBillRecord) -> Self {
        BillDraft {
            id: Some(record.id),
            name: record.name.clone(),
            issuer: record.issuer.clone(),
            category: record.category.clone(),
            amount: Some(record.amount),
            start_date: record.start_date,
            end_date: record.end_date,
            duration: Some(record.duration),
        }
    }

    /// Validates the draft and produces the payload sent to the backend.
    pub fn into_record(self) -> Result<MonthlyBillRecord> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        let amount = self.amount.unwrap_or(Decimal::ZERO);
        if amount < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput(format!("Amount cannot be negative: {}", amount))
                    .into(),
            );
        }
        validate_date_range(self.start_date, self.end_date)?;

        let duration = self
            .duration
            .filter(|months| *months >= 1)
            .unwrap_or_else(|| match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => billing_months_between(start, end),
                _ => 1,
            });

        Ok(MonthlyBillRecord {
            id: self.id.unwrap_or(0),
            name: self.name,
            issuer: self.issuer,
            category: self.category,
            amount,
            start_date: self.start_date,
            end_date: self.end_date,
            duration,
        })
    }
}

fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }
    }
    Ok(())
}
