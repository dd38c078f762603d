//! Metrics module - pure calculations behind the dashboard and reports pages.

mod budget_metrics;
mod budget_notices;
mod category_breakdown;
mod dashboard_summary;
mod metrics_traits;
mod period_series;

pub use budget_metrics::{
    compute_money_left, compute_money_left_percentage, compute_over_budget,
    compute_saving_goal_percentage, compute_spending_limit, compute_spending_percentage,
    BudgetStatus,
};
pub use budget_notices::{budget_notices, is_saving_goal_achieved, spending_alert_levels, BudgetNotice};
pub use category_breakdown::{
    aggregate_by_category, bill_breakdown, breakdown_total, expense_breakdown, purchase_breakdown,
    CategorySlice, ColorMap,
};
pub use dashboard_summary::DashboardSummary;
pub use metrics_traits::ExpenseEntry;
pub use period_series::{daily_category_series, monthly_totals, DailyCategoryPoint};
