use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::budget_metrics::BudgetStatus;
use crate::alerts::AlertSeverity;
use crate::constants::SPENDING_ALERT_THRESHOLDS;

/// A locally derived notification about the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetNotice {
    pub title: String,
    pub severity: AlertSeverity,
    /// The spending threshold crossed, or `None` for the saving-goal notice.
    pub threshold: Option<u32>,
}

/// Thresholds from [`SPENDING_ALERT_THRESHOLDS`] the percentage has reached,
/// ascending.
pub fn spending_alert_levels(spending_percentage: Decimal) -> Vec<u32> {
    SPENDING_ALERT_THRESHOLDS
        .iter()
        .copied()
        .filter(|threshold| spending_percentage >= Decimal::from(*threshold))
        .collect()
}

/// True when there is a savings target and spending stayed within the limit.
pub fn is_saving_goal_achieved(status: &BudgetStatus) -> bool {
    status.saving_goal > Decimal::ZERO && status.over_budget <= Decimal::ZERO
}

fn threshold_severity(threshold: u32) -> AlertSeverity {
    match threshold {
        t if t >= 100 => AlertSeverity::Critical,
        t if t >= 60 => AlertSeverity::Warning,
        _ => AlertSeverity::Info,
    }
}

/// Notices for the current budget status, most severe threshold first.
pub fn budget_notices(status: &BudgetStatus) -> Vec<BudgetNotice> {
    let mut notices = Vec::new();
    if is_saving_goal_achieved(status) {
        notices.push(BudgetNotice {
            title: "You Achieved your Saving Goal !".to_string(),
            severity: AlertSeverity::Success,
            threshold: None,
        });
    }

    for threshold in spending_alert_levels(status.spending_percentage).into_iter().rev() {
        notices.push(BudgetNotice {
            title: format!("You reached {}% of Spending Limit", threshold),
            severity: threshold_severity(threshold),
            threshold: Some(threshold),
        });
    }
    notices
}
