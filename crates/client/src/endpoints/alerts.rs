use ecofi_core::alerts::{sort_alerts_newest_first, Alert, RawAlert};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Fetch alerts, newest first.
    pub async fn list_alerts(&self) -> Result<Vec<Alert>> {
        let raw: Option<Vec<RawAlert>> = self.get_json(paths::GET_ALERTS).await?;
        let mut alerts: Vec<Alert> = raw
            .unwrap_or_default()
            .into_iter()
            .map(Alert::from_raw)
            .collect();
        sort_alerts_newest_first(&mut alerts);
        Ok(alerts)
    }
}
