use ecofi_core::best_price::{
    price_history_series, visible_offers, BestPriceProduct, PriceHistoryPoint, RawBestPriceProduct,
    RawPriceHistoryPoint,
};

use super::paths;
use crate::client::ApiClient;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Best Price Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    /// Offers for one to-buy list. Offers without a positive price are hidden.
    pub async fn best_price_products(&self, list_id: i64) -> Result<Vec<BestPriceProduct>> {
        let path = format!("{}/{}", paths::BEST_PRICE_PRODUCTS, list_id);
        let raw: Option<Vec<RawBestPriceProduct>> = self.get_json(&path).await?;
        Ok(visible_offers(
            raw.unwrap_or_default()
                .into_iter()
                .map(BestPriceProduct::from_raw)
                .collect(),
        ))
    }

    pub async fn best_price_product_details(&self, id: i64) -> Result<Option<BestPriceProduct>> {
        let path = format!("{}/{}", paths::BEST_PRICE_PRODUCT_DETAILS, id);
        let raw: Option<RawBestPriceProduct> = self.get_json(&path).await?;
        Ok(raw.map(BestPriceProduct::from_raw))
    }

    /// Price history, oldest first.
    pub async fn product_price_history(&self, id: i64) -> Result<Vec<PriceHistoryPoint>> {
        let path = format!("{}{}", paths::PRODUCT_PRICE_HISTORY, id);
        let raw: Option<Vec<RawPriceHistoryPoint>> = self.get_json(&path).await?;
        Ok(price_history_series(
            raw.unwrap_or_default()
                .into_iter()
                .map(PriceHistoryPoint::from_raw)
                .collect(),
        ))
    }
}
