use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::best_price::BestPriceProduct;
use crate::utils::decimal_utils::saturating_sum;

/// A product on the to-buy list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub product_id: i64,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl ShoppingItem {
    pub fn new(product_id: i64, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_id,
            title: title.into(),
            price,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

impl From<&BestPriceProduct> for ShoppingItem {
    fn from(product: &BestPriceProduct) -> Self {
        ShoppingItem::new(product.id, product.product_name.clone(), product.price)
    }
}

/// The session-local to-buy list. Nothing here is sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, product_id: i64) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds the item, or bumps its quantity by one if already listed.
    pub fn add(&mut self, item: ShoppingItem) {
        match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(ShoppingItem { quantity: 1, ..item }),
        }
    }

    /// Removes the item; returns whether it was listed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    /// Sets the quantity. Values below 1 are ignored and `false` returned.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = quantity.min(u32::MAX as i64) as u32;
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn total(&self) -> Decimal {
        saturating_sum(self.items.iter().map(ShoppingItem::subtotal))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
