use chrono::Local;
use log::info;

use ecofi_core::purchases::{PurchaseDraft, PurchaseRecord, RawPurchaseRecord};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;

// ─────────────────────────────────────────────────────────────────────────────
// Purchase Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    /// Fetch all purchases, normalized.
    pub async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>> {
        let raw: Option<Vec<RawPurchaseRecord>> = self.get_json(paths::GET_ALL_PURCHASES).await?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(PurchaseRecord::from_raw)
            .collect())
    }

    /// Validate and submit a new purchase. The date defaults to today.
    pub async fn add_purchase(&self, draft: PurchaseDraft) -> Result<PurchaseRecord> {
        let record = draft.into_record(Local::now().date_naive())?;
        let request = ApiRequest::post(paths::ADD_PURCHASE).with_json(&record)?;
        self.send_unit(request).await?;
        info!("[ApiClient] Added purchase '{}'", record.product_name);
        Ok(record)
    }

    pub async fn update_purchase(&self, record: &PurchaseRecord) -> Result<()> {
        let record = record.clone().normalized();
        let request = ApiRequest::put(paths::UPDATE_PURCHASE).with_json(&record)?;
        self.send_unit(request).await
    }

    pub async fn delete_purchase(&self, id: i64) -> Result<()> {
        self.send_unit(ApiRequest::delete(format!("{}/{}", paths::DELETE_PURCHASE, id)))
            .await
    }

    /// Save, then refetch. The refetch starts only after the write succeeded.
    pub async fn add_purchase_and_reload(&self, draft: PurchaseDraft) -> Result<Vec<PurchaseRecord>> {
        self.add_purchase(draft).await?;
        self.list_purchases().await
    }
}
