//! Purchase domain models.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::best_price::BestPriceProduct;
use crate::errors::{Result, ValidationError};
use crate::filters::Searchable;
use crate::metrics::ExpenseEntry;
use crate::utils::json_utils::{amount_from_value, integer_from_value, string_from_value};
use crate::utils::time_utils::parse_record_date;

/// Clamps a raw quantity to the minimum of one item.
pub fn normalize_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, u32::MAX as i64) as u32
}

/// A purchase as the dashboard displays it and the backend accepts it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: i64,
    pub product_name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: u32,
    pub shop_name: String,
    pub date: Option<NaiveDate>,
}

impl PurchaseRecord {
    /// Builds a record from the API payload, applying the field defaults.
    pub fn from_raw(raw: RawPurchaseRecord) -> Self {
        let date = string_from_value(raw.date.as_ref()).and_then(|text| {
            let parsed = parse_record_date(&text);
            if parsed.is_none() {
                warn!("[Purchases] Unparseable purchase date '{}'", text);
            }
            parsed
        });

        PurchaseRecord {
            id: integer_from_value(raw.id.as_ref()).unwrap_or_default(),
            product_name: string_from_value(raw.product_name.as_ref()).unwrap_or_default(),
            category: string_from_value(raw.category.as_ref()).unwrap_or_default(),
            price: amount_from_value(raw.price.as_ref()),
            quantity: normalize_quantity(integer_from_value(raw.quantity.as_ref()).unwrap_or(1)),
            shop_name: string_from_value(raw.shop_name.as_ref()).unwrap_or_default(),
            date,
        }
    }

    /// Returns the record with quantity and price brought back into range.
    pub fn normalized(mut self) -> Self {
        self.quantity = self.quantity.max(1);
        self.price = self.price.max(Decimal::ZERO);
        self
    }

    /// Line total: unit price times quantity, saturating on overflow.
    pub fn total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

impl ExpenseEntry for PurchaseRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn expense_date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn expense_amount(&self) -> Decimal {
        self.total()
    }
}

impl Searchable for PurchaseRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.shop_name.as_str()]
    }
}

/// Purchase exactly as the backend returns it, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurchaseRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "itemName")]
    pub product_name: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub shop_name: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
}

impl From<RawPurchaseRecord> for PurchaseRecord {
    fn from(raw: RawPurchaseRecord) -> Self {
        PurchaseRecord::from_raw(raw)
    }
}

/// Form state for the "add purchase" and "edit purchase" views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDraft {
    pub id: Option<i64>,
    pub product_name: String,
    pub category: String,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub shop_name: String,
    pub date: Option<NaiveDate>,
}

impl PurchaseDraft {
    /// Prefills a draft from a best-price product ("mark as purchased").
    pub fn from_best_price(product: &BestPriceProduct) -> Self {
        PurchaseDraft {
            id: None,
            product_name: product.product_name.clone(),
            category: product.category.clone().unwrap_or_default(),
            price: Some(product.price),
            quantity: Some(1),
            shop_name: product.shop_name.clone().unwrap_or_default(),
            date: None,
        }
    }

    /// Prefills an edit draft from an existing record.
    pub fn from_record(record: &PurchaseRecord) -> Self {
        PurchaseDraft {
            id: Some(record.id),
            product_name: record.product_name.clone(),
            category: record.category.clone(),
            price: Some(record.price),
            quantity: Some(i64::from(record.quantity)),
            shop_name: record.shop_name.clone(),
            date: record.date,
        }
    }

    /// Validates the draft and produces the payload sent to the backend.
    ///
    /// New purchases carry id 0; a missing date defaults to `today`.
    pub fn into_record(self, today: NaiveDate) -> Result<PurchaseRecord> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingField("productName".to_string()).into());
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Price cannot be negative: {}",
                    price
                ))
                .into());
            }
        }

        Ok(PurchaseRecord {
            id: self.id.unwrap_or(0),
            product_name: self.product_name,
            category: self.category,
            price: self.price.unwrap_or(Decimal::ZERO),
            quantity: normalize_quantity(self.quantity.unwrap_or(1)),
            shop_name: self.shop_name,
            date: Some(self.date.unwrap_or(today)),
        })
    }
}
