//! Spending-limit and saving-goal arithmetic.
//!
//! All functions are pure and return raw decimals; formatting is left to
//! callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_utils::percentage_of;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Budget ceiling: `salary - saving_goal`. May be zero or negative.
pub fn compute_spending_limit(salary: Decimal, saving_goal: Decimal) -> Decimal {
    salary.saturating_sub(saving_goal)
}

/// Share of the spending limit already spent, in percent.
///
/// Returns 0 when the limit is zero or negative. The result is not capped at
/// 100 so overspending stays visible.
pub fn compute_spending_percentage(
    total_expenses: Decimal,
    salary: Decimal,
    saving_goal: Decimal,
) -> Decimal {
    let spending_limit = compute_spending_limit(salary, saving_goal);
    if spending_limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percentage_of(total_expenses, spending_limit)
}

/// Amount spent beyond the spending limit; zero when within budget.
pub fn compute_over_budget(total_expenses: Decimal, salary: Decimal, saving_goal: Decimal) -> Decimal {
    total_expenses
        .saturating_sub(compute_spending_limit(salary, saving_goal))
        .max(Decimal::ZERO)
}

/// Share of the savings target still intact after any overrun, in percent.
pub fn compute_saving_goal_percentage(saving_goal: Decimal, over_budget: Decimal) -> Decimal {
    if over_budget <= Decimal::ZERO {
        return ONE_HUNDRED;
    }
    if saving_goal > Decimal::ZERO {
        return percentage_of(saving_goal.saturating_sub(over_budget), saving_goal).max(Decimal::ZERO);
    }
    Decimal::ZERO
}

/// Salary left after expenses. Negative when overspent.
pub fn compute_money_left(salary: Decimal, total_expenses: Decimal) -> Decimal {
    salary.saturating_sub(total_expenses)
}

/// Money left as a share of salary, in percent; 0 without a salary.
pub fn compute_money_left_percentage(salary: Decimal, total_expenses: Decimal) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percentage_of(compute_money_left(salary, total_expenses), salary)
}

/// The spending-limit and saving-goal figures shown together on the
/// dashboard and reports pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub total_expenses: Decimal,
    pub spending_limit: Decimal,
    pub spending_percentage: Decimal,
    pub over_budget: Decimal,
    pub saving_goal: Decimal,
    pub saving_goal_percentage: Decimal,
}

impl BudgetStatus {
    pub fn compute(total_expenses: Decimal, salary: Decimal, saving_goal: Decimal) -> Self {
        let over_budget = compute_over_budget(total_expenses, salary, saving_goal);
        BudgetStatus {
            total_expenses,
            spending_limit: compute_spending_limit(salary, saving_goal),
            spending_percentage: compute_spending_percentage(total_expenses, salary, saving_goal),
            over_budget,
            saving_goal,
            saving_goal_percentage: compute_saving_goal_percentage(saving_goal, over_budget),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.over_budget > Decimal::ZERO
    }

    /// Savings target still intact, in money rather than percent.
    pub fn saving_goal_remaining(&self) -> Decimal {
        self.saving_goal.saturating_sub(self.over_budget).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_within_budget_scenario() {
        let status = BudgetStatus::compute(dec!(12000), dec!(20000), dec!(5000));
        assert_eq!(status.spending_limit, dec!(15000));
        assert_eq!(status.spending_percentage, dec!(80.0));
        assert_eq!(status.over_budget, Decimal::ZERO);
        assert_eq!(status.saving_goal_percentage, dec!(100));
        assert!(!status.is_over_budget());
        assert_eq!(status.saving_goal_remaining(), dec!(5000));
    }

    #[test]
    fn test_over_budget_scenario() {
        let status = BudgetStatus::compute(dec!(17000), dec!(20000), dec!(5000));
        assert_eq!(status.spending_limit, dec!(15000));
        assert_eq!(status.over_budget, dec!(2000));
        assert_eq!(status.saving_goal_percentage, dec!(60.0));
        assert!(status.is_over_budget());
        assert_eq!(status.saving_goal_remaining(), dec!(3000));
    }

    #[test]
    fn test_spending_percentage_non_positive_limit() {
        assert_eq!(compute_spending_percentage(dec!(500), dec!(5000), dec!(5000)), Decimal::ZERO);
        assert_eq!(compute_spending_percentage(dec!(500), dec!(1000), dec!(5000)), Decimal::ZERO);
        assert_eq!(compute_spending_percentage(dec!(0), dec!(0), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_spending_percentage_not_capped() {
        assert_eq!(compute_spending_percentage(dec!(3000), dec!(2000), dec!(0)), dec!(150));
    }

    #[test]
    fn test_saving_goal_percentage_edges() {
        assert_eq!(compute_saving_goal_percentage(dec!(0), dec!(0)), dec!(100));
        assert_eq!(compute_saving_goal_percentage(dec!(0), dec!(10)), Decimal::ZERO);
        assert_eq!(compute_saving_goal_percentage(dec!(1000), dec!(2500)), Decimal::ZERO);
        assert_eq!(compute_saving_goal_percentage(dec!(1000), dec!(250)), dec!(75));
    }

    #[test]
    fn test_money_left() {
        assert_eq!(compute_money_left(dec!(20000), dec!(10000)), dec!(10000));
        assert_eq!(compute_money_left_percentage(dec!(20000), dec!(10000)), dec!(50));
        assert_eq!(compute_money_left(dec!(1000), dec!(1500)), dec!(-500));
        assert_eq!(compute_money_left_percentage(dec!(0), dec!(1500)), Decimal::ZERO);
    }
}
