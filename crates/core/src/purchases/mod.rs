//! Purchases module - purchase records, drafts, and normalization.

mod purchases_model;

#[cfg(test)]
mod purchases_model_tests;

pub use purchases_model::{normalize_quantity, PurchaseDraft, PurchaseRecord, RawPurchaseRecord};
