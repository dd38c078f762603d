use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::metrics_traits::ExpenseEntry;
use crate::constants::{MAX_SERIES_DAYS, MAX_SERIES_MONTHS};
use crate::expenses::MonthlyExpense;
use crate::utils::decimal_utils::saturating_sum;
use crate::utils::time_utils::{get_days_between, month_label, shift_month};

/// Stacked daily-expense chart point: one value per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCategoryPoint {
    pub date: NaiveDate,
    pub values: Vec<(String, Decimal)>,
}

impl DailyCategoryPoint {
    pub fn total(&self) -> Decimal {
        saturating_sum(self.values.iter().map(|(_, v)| *v))
    }

    pub fn value_for(&self, category: &str) -> Decimal {
        self.values
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }
}

/// Totals for the last `months` calendar months ending with `today`'s month.
///
/// Oldest first and zero-filled. Undated records are ignored. `months` is
/// capped at `MAX_SERIES_MONTHS`.
pub fn monthly_totals<T: ExpenseEntry>(
    records: &[T],
    months: u32,
    today: NaiveDate,
) -> Vec<MonthlyExpense> {
    let months = months.min(MAX_SERIES_MONTHS);
    if months == 0 {
        return Vec::new();
    }

    let mut by_month: HashMap<(i32, u32), Decimal> = HashMap::new();
    for record in records {
        if let Some(date) = record.expense_date() {
            let total = by_month.entry((date.year(), date.month())).or_default();
            *total = total.saturating_add(record.expense_amount());
        }
    }

    (0..months as i32)
        .rev()
        .map(|back| {
            let (year, month) = shift_month(today.year(), today.month(), -back);
            MonthlyExpense {
                month: month_label(year, month),
                total: by_month.get(&(year, month)).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Per-day, per-category values for the last `days` days ending at `today`.
///
/// Every point lists the canonical categories in order, then any other
/// category seen in the window in first-occurrence order. Missing values are
/// zero. `days` is capped at `MAX_SERIES_DAYS`, and the window never starts
/// before the earliest representable date.
pub fn daily_category_series<T: ExpenseEntry>(
    records: &[T],
    days: u32,
    today: NaiveDate,
    categories: &[&str],
) -> Vec<DailyCategoryPoint> {
    let days = days.min(MAX_SERIES_DAYS);
    if days == 0 {
        return Vec::new();
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .unwrap_or(NaiveDate::MIN);

    let mut columns: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
    let mut cells: HashMap<(NaiveDate, String), Decimal> = HashMap::new();
    for record in records {
        let Some(date) = record.expense_date() else {
            continue;
        };
        if date < start || date > today {
            continue;
        }
        let category = record.category();
        if !columns.iter().any(|c| c == category) {
            columns.push(category.to_string());
        }
        let cell = cells.entry((date, category.to_string())).or_default();
        *cell = cell.saturating_add(record.expense_amount());
    }

    get_days_between(start, today)
        .into_iter()
        .map(|date| DailyCategoryPoint {
            date,
            values: columns
                .iter()
                .map(|c| {
                    let value = cells.get(&(date, c.clone())).copied().unwrap_or_default();
                    (c.clone(), value)
                })
                .collect(),
        })
        .collect()
}
