//! Financial goal domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ValidationError};
use crate::metrics::compute_spending_limit;
use crate::utils::json_utils::amount_from_value;

/// The user's income and savings target. One per user, overwritten on update.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub salary: Decimal,
    pub saving_goal: Decimal,
}

impl FinancialGoal {
    pub fn new(salary: Decimal, saving_goal: Decimal) -> Result<Self> {
        if salary < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Salary cannot be negative: {}",
                salary
            ))
            .into());
        }
        if saving_goal < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Saving goal cannot be negative: {}",
                saving_goal
            ))
            .into());
        }
        Ok(FinancialGoal {
            salary,
            saving_goal,
        })
    }

    pub fn from_raw(raw: RawFinancialGoal) -> Self {
        let saving_goal = raw.saving_goal.as_ref().or(raw.financial_goal.as_ref());
        FinancialGoal {
            salary: amount_from_value(raw.salary.as_ref()),
            saving_goal: amount_from_value(saving_goal),
        }
    }

    /// Budget ceiling: salary minus the savings target.
    pub fn spending_limit(&self) -> Decimal {
        compute_spending_limit(self.salary, self.saving_goal)
    }
}

/// Goal payload as returned by the backend, which names the target either
/// `savingGoal` or `financialGoal`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFinancialGoal {
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default)]
    pub saving_goal: Option<Value>,
    #[serde(default)]
    pub financial_goal: Option<Value>,
}

/// Body sent when setting or updating the goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoalPayload {
    pub salary: Decimal,
    pub financial_goal: Decimal,
}

impl From<&FinancialGoal> for FinancialGoalPayload {
    fn from(goal: &FinancialGoal) -> Self {
        FinancialGoalPayload {
            salary: goal.salary,
            financial_goal: goal.saving_goal,
        }
    }
}
