//! Tests for purchase parsing, normalization, and drafts.

use crate::best_price::BestPriceProduct;
use crate::errors::{Error, ValidationError};
use crate::purchases::{normalize_quantity, PurchaseDraft, PurchaseRecord, RawPurchaseRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse(value: serde_json::Value) -> PurchaseRecord {
    let raw: RawPurchaseRecord = serde_json::from_value(value).unwrap();
    PurchaseRecord::from_raw(raw)
}

// ==================== Parsing Boundary ====================

#[test]
fn test_from_raw_full_record() {
    let record = parse(json!({
        "id": 7,
        "productName": "Hat",
        "category": "Shopping",
        "price": 400.0,
        "quantity": 2,
        "shopName": "Tree",
        "date": "2022-06-29T00:00:00"
    }));

    assert_eq!(record.id, 7);
    assert_eq!(record.product_name, "Hat");
    assert_eq!(record.price, dec!(400));
    assert_eq!(record.quantity, 2);
    assert_eq!(record.date, Some(date(2022, 6, 29)));
    assert_eq!(record.total(), dec!(800));
}

#[test]
fn test_from_raw_zero_quantity_becomes_one() {
    let record = parse(json!({ "productName": "Meat", "quantity": 0, "price": 500 }));
    assert_eq!(record.quantity, 1);
}

#[test]
fn test_from_raw_missing_fields_use_defaults() {
    let record = parse(json!({}));

    assert_eq!(record.id, 0);
    assert_eq!(record.product_name, "");
    assert_eq!(record.price, Decimal::ZERO);
    assert_eq!(record.quantity, 1);
    assert_eq!(record.date, None);
}

#[test]
fn test_from_raw_non_numeric_price_defaults_to_zero() {
    let record = parse(json!({ "price": "free", "quantity": "3" }));
    assert_eq!(record.price, Decimal::ZERO);
    assert_eq!(record.quantity, 3);
}

#[test]
fn test_from_raw_keeps_category_whitespace() {
    let record = parse(json!({ "category": " Other" }));
    assert_eq!(record.category, " Other");
}

#[test]
fn test_from_raw_unparseable_date_is_none() {
    let record = parse(json!({ "date": "sometime" }));
    assert_eq!(record.date, None);
}

#[test]
fn test_from_raw_accepts_item_name_alias() {
    let record = parse(json!({ "itemName": "Jeans" }));
    assert_eq!(record.product_name, "Jeans");
}

#[test]
fn test_list_with_numeric_shop_name_decodes() {
    let raws: Vec<RawPurchaseRecord> = serde_json::from_value(json!([
        { "id": 1, "productName": "Rice", "shopName": "Carrefour", "price": 40 },
        { "id": 2, "productName": 7, "category": 3, "shopName": 42, "date": {} }
    ]))
    .unwrap();

    let records: Vec<PurchaseRecord> = raws.into_iter().map(PurchaseRecord::from_raw).collect();
    assert_eq!(records[1].shop_name, "42");
    assert_eq!(records[1].product_name, "7");
    assert_eq!(records[1].category, "3");
    assert_eq!(records[1].date, None);
}

// ==================== Normalization ====================

#[test]
fn test_normalize_quantity_floor() {
    assert_eq!(normalize_quantity(0), 1);
    assert_eq!(normalize_quantity(-4), 1);
    assert_eq!(normalize_quantity(5), 5);
}

#[test]
fn test_normalized_is_idempotent() {
    let record = PurchaseRecord {
        id: 1,
        product_name: "Jacket".to_string(),
        category: "Shopping".to_string(),
        price: dec!(60),
        quantity: 0,
        shop_name: "American Eagle".to_string(),
        date: None,
    };

    let once = record.normalized();
    assert_eq!(once.quantity, 1);
    let twice = once.clone().normalized();
    assert_eq!(once, twice);
}

// ==================== Drafts ====================

#[test]
fn test_draft_into_record_applies_defaults() {
    let draft = PurchaseDraft {
        product_name: "Milk".to_string(),
        category: "Food & Drink".to_string(),
        price: Some(dec!(35.5)),
        quantity: Some(0),
        shop_name: "Gomla Market".to_string(),
        ..Default::default()
    };

    let record = draft.into_record(date(2024, 4, 17)).unwrap();

    assert_eq!(record.id, 0);
    assert_eq!(record.quantity, 1);
    assert_eq!(record.date, Some(date(2024, 4, 17)));
}

#[test]
fn test_draft_requires_name_and_category() {
    let missing_name = PurchaseDraft {
        category: "Shopping".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        missing_name.into_record(date(2024, 1, 1)),
        Err(Error::Validation(ValidationError::MissingField(field))) if field == "productName"
    ));

    let missing_category = PurchaseDraft {
        product_name: "Hat".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        missing_category.into_record(date(2024, 1, 1)),
        Err(Error::Validation(ValidationError::MissingField(field))) if field == "category"
    ));
}

#[test]
fn test_draft_rejects_negative_price() {
    let draft = PurchaseDraft {
        product_name: "Hat".to_string(),
        category: "Shopping".to_string(),
        price: Some(dec!(-1)),
        ..Default::default()
    };
    assert!(draft.into_record(date(2024, 1, 1)).is_err());
}

#[test]
fn test_draft_from_best_price() {
    let product = BestPriceProduct {
        id: 3,
        product_name: "Laptop".to_string(),
        description: None,
        price: dec!(25999),
        shop_name: Some("Amazon".to_string()),
        image: None,
        url: None,
        category: Some("Shopping".to_string()),
        date: None,
    };

    let draft = PurchaseDraft::from_best_price(&product);
    assert_eq!(draft.product_name, "Laptop");
    assert_eq!(draft.price, Some(dec!(25999)));
    assert_eq!(draft.shop_name, "Amazon");
    assert_eq!(draft.quantity, Some(1));
}

#[test]
fn test_draft_round_trips_existing_record() {
    let record = parse(json!({ "id": 9, "productName": "Hat", "category": "Shopping", "price": 10, "quantity": 2, "date": "2024-03-01" }));
    let draft = PurchaseDraft::from_record(&record);
    let rebuilt = draft.into_record(date(2030, 1, 1)).unwrap();
    assert_eq!(rebuilt, record);
}

#[test]
fn test_record_serializes_camel_case() {
    let record = parse(json!({ "id": 1, "productName": "Hat", "price": 12.5, "quantity": 1, "date": "2024-03-01" }));
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["productName"], "Hat");
    assert_eq!(value["shopName"], "");
    assert_eq!(value["date"], "2024-03-01");
    assert_eq!(value["price"], 12.5);
}
