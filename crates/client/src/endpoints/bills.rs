use ecofi_core::bills::{parse_bills, BillDraft, MonthlyBillRecord, RawMonthlyBillRecord};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;

// ─────────────────────────────────────────────────────────────────────────────
// Monthly Bill Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    /// Fetch all monthly bills. Bills ending before they start are skipped.
    pub async fn list_bills(&self) -> Result<Vec<MonthlyBillRecord>> {
        let raw: Option<Vec<RawMonthlyBillRecord>> = self.get_json(paths::GET_ALL_BILLS).await?;
        Ok(parse_bills(raw.unwrap_or_default()))
    }

    pub async fn add_bill(&self, draft: BillDraft) -> Result<MonthlyBillRecord> {
        let record = draft.into_record()?;
        self.send_unit(ApiRequest::post(paths::ADD_BILL).with_json(&record)?)
            .await?;
        Ok(record)
    }

    pub async fn update_bill(&self, draft: BillDraft) -> Result<MonthlyBillRecord> {
        let record = draft.into_record()?;
        self.send_unit(ApiRequest::put(paths::UPDATE_BILL).with_json(&record)?)
            .await?;
        Ok(record)
    }

    pub async fn delete_bill(&self, id: i64) -> Result<()> {
        self.send_unit(ApiRequest::delete(format!("{}/{}", paths::DELETE_BILL, id)))
            .await
    }

    /// Save, then refetch once the write resolved.
    pub async fn add_bill_and_reload(&self, draft: BillDraft) -> Result<Vec<MonthlyBillRecord>> {
        self.add_bill(draft).await?;
        self.list_bills().await
    }
}
