use rust_decimal::Decimal;
use serde_json::Value;

use ecofi_core::expenses::{
    parse_total_expenses, ExpensePoint, MonthlyExpense, RawExpensePoint, RawMonthlyExpense,
};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate Expense Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    pub async fn total_expenses(&self) -> Result<Decimal> {
        let value: Value = self.get_json(paths::TOTAL_EXPENSES).await?;
        Ok(parse_total_expenses(&value))
    }

    pub async fn expenses_last_months(&self, months: u32) -> Result<Vec<MonthlyExpense>> {
        let path = format!("{}/{}", paths::EXPENSES_LAST_MONTHS, months);
        let raw: Option<Vec<RawMonthlyExpense>> = self.get_json(&path).await?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(MonthlyExpense::from_raw)
            .collect())
    }

    pub async fn expenses_last_days_with_categories(&self, days: u32) -> Result<Vec<ExpensePoint>> {
        let path = format!("{}/{}", paths::EXPENSES_LAST_DAYS_WITH_CATEGORIES, days);
        let raw: Option<Vec<RawExpensePoint>> = self.get_json(&path).await?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(ExpensePoint::from_raw)
            .collect())
    }
}
