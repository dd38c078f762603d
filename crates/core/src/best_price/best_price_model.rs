//! Best-price comparison models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::json_utils::{
    amount_from_value, date_from_value, integer_from_value, string_from_value,
};

/// A shop offer for a product on the user's to-buy list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestPriceProduct {
    pub id: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub shop_name: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl BestPriceProduct {
    pub fn from_raw(raw: RawBestPriceProduct) -> Self {
        BestPriceProduct {
            id: integer_from_value(raw.id.as_ref()).unwrap_or_default(),
            product_name: string_from_value(raw.product_name.as_ref()).unwrap_or_default(),
            description: string_from_value(raw.description.as_ref())
                .filter(|d| !d.trim().is_empty()),
            price: amount_from_value(raw.price.as_ref()),
            shop_name: string_from_value(raw.shop_name.as_ref()),
            image: string_from_value(raw.image.as_ref()),
            url: string_from_value(raw.url.as_ref()),
            category: string_from_value(raw.category.as_ref()),
            date: date_from_value(raw.date.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBestPriceProduct {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub product_name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub shop_name: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
}

/// One recorded price for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryPoint {
    pub date_recorded: Option<NaiveDate>,
    pub price: Decimal,
}

impl PriceHistoryPoint {
    pub fn from_raw(raw: RawPriceHistoryPoint) -> Self {
        PriceHistoryPoint {
            date_recorded: date_from_value(raw.date_recorded.as_ref()),
            price: amount_from_value(raw.price.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceHistoryPoint {
    #[serde(default)]
    pub date_recorded: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// Offers worth showing: products without a positive price are hidden.
pub fn visible_offers(products: Vec<BestPriceProduct>) -> Vec<BestPriceProduct> {
    products
        .into_iter()
        .filter(|product| product.price > Decimal::ZERO)
        .collect()
}

/// The cheapest visible offer, first one wins on ties.
pub fn cheapest_offer(products: &[BestPriceProduct]) -> Option<&BestPriceProduct> {
    products
        .iter()
        .filter(|product| product.price > Decimal::ZERO)
        .fold(None, |best: Option<&BestPriceProduct>, product| match best {
            Some(current) if current.price <= product.price => Some(current),
            _ => Some(product),
        })
}

/// Orders a price history for the line chart: oldest first, undated points
/// dropped.
pub fn price_history_series(points: Vec<PriceHistoryPoint>) -> Vec<PriceHistoryPoint> {
    let mut dated: Vec<PriceHistoryPoint> = points
        .into_iter()
        .filter(|point| point.date_recorded.is_some())
        .collect();
    dated.sort_by_key(|point| point.date_recorded);
    dated
}
