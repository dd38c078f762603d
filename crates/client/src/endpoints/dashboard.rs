use ecofi_core::bills::MonthlyBillRecord;
use ecofi_core::goals::FinancialGoal;
use ecofi_core::purchases::PurchaseRecord;

use crate::client::ApiClient;
use crate::error::Result;

/// The three record sets the dashboard and reports pages are computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardInputs {
    pub purchases: Vec<PurchaseRecord>,
    pub bills: Vec<MonthlyBillRecord>,
    pub goal: Option<FinancialGoal>,
}

impl ApiClient {
    /// Fetches purchases, bills and the goal concurrently. Fails if any of
    /// the three requests fails.
    pub async fn fetch_dashboard_inputs(&self) -> Result<DashboardInputs> {
        let (purchases, bills, goal) = tokio::try_join!(
            self.list_purchases(),
            self.list_bills(),
            self.get_financial_goal(),
        )?;
        Ok(DashboardInputs {
            purchases,
            bills,
            goal,
        })
    }
}
