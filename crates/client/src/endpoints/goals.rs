use log::debug;

use ecofi_core::goals::{FinancialGoal, FinancialGoalPayload, RawFinancialGoal};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;

// ─────────────────────────────────────────────────────────────────────────────
// Financial Goal Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    /// Fetch the user's goal. `None` when none was set yet (404 or empty body).
    pub async fn get_financial_goal(&self) -> Result<Option<FinancialGoal>> {
        match self
            .get_json::<Option<RawFinancialGoal>>(paths::GET_FINANCIAL_GOAL)
            .await
        {
            Ok(raw) => Ok(raw.map(FinancialGoal::from_raw)),
            Err(e) if e.is_not_found() => {
                debug!("[ApiClient] No financial goal set");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn set_financial_goal(&self, goal: &FinancialGoal) -> Result<()> {
        let payload = FinancialGoalPayload::from(goal);
        self.send_unit(ApiRequest::post(paths::ADD_FINANCIAL_GOAL).with_json(&payload)?)
            .await
    }

    pub async fn update_financial_goal(&self, goal: &FinancialGoal) -> Result<()> {
        let payload = FinancialGoalPayload::from(goal);
        self.send_unit(ApiRequest::put(paths::UPDATE_FINANCIAL_GOAL).with_json(&payload)?)
            .await
    }

    /// Updates the goal if one exists, otherwise creates it.
    pub async fn save_financial_goal(&self, goal: &FinancialGoal) -> Result<()> {
        match self.get_financial_goal().await? {
            Some(_) => self.update_financial_goal(goal).await,
            None => self.set_financial_goal(goal).await,
        }
    }
}
