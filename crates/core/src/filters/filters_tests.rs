use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::bills::MonthlyBillRecord;
use crate::errors::{Error, ValidationError};
use crate::purchases::PurchaseRecord;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn purchase(id: i64, name: &str, shop: &str, category: &str, day: Option<u32>) -> PurchaseRecord {
    PurchaseRecord {
        id,
        product_name: name.to_string(),
        category: category.to_string(),
        price: dec!(10),
        quantity: 1,
        shop_name: shop.to_string(),
        date: day.map(|d| date(2024, 4, d)),
    }
}

fn purchases() -> Vec<PurchaseRecord> {
    vec![
        purchase(1, "Milk", "Carrefour", "Food & Drink", Some(3)),
        purchase(2, "Sneakers", "Amazon", "Shopping", Some(10)),
        purchase(3, "Metro card", "Metro", "Transportation", None),
        purchase(4, "Coffee", "Amazon Fresh", "Food & Drink", Some(20)),
    ]
}

fn ids(records: &[&PurchaseRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_no_active_filters_returns_input() {
    let records = purchases();
    let filtered = filter_records(&records, &RecordFilter::default());
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);

    // Whitespace-only text is inactive too.
    let filtered = filter_records(&records, &RecordFilter::text("   "));
    assert_eq!(filtered.len(), 4);
}

#[test]
fn test_text_search_is_case_insensitive_over_name_and_shop() {
    let records = purchases();
    assert_eq!(ids(&filter_records(&records, &RecordFilter::text("AMAZON"))), vec![2, 4]);
    assert_eq!(ids(&filter_records(&records, &RecordFilter::text("milk"))), vec![1]);
}

#[test]
fn test_category_match_is_exact() {
    let records = purchases();
    let filtered = filter_records(&records, &RecordFilter::category("Food & Drink"));
    assert_eq!(ids(&filtered), vec![1, 4]);
    assert!(filter_records(&records, &RecordFilter::category("food & drink")).is_empty());
}

#[test]
fn test_date_range_inclusive_and_skips_undated() {
    let records = purchases();
    let filter = RecordFilter::date_range(Some(date(2024, 4, 3)), Some(date(2024, 4, 10))).unwrap();
    assert_eq!(ids(&filter_records(&records, &filter)), vec![1, 2]);

    let open_end = RecordFilter::date_range(Some(date(2024, 4, 10)), None).unwrap();
    assert_eq!(ids(&filter_records(&records, &open_end)), vec![2, 4]);
}

#[test]
fn test_inverted_date_range_is_rejected() {
    let result = RecordFilter::date_range(Some(date(2024, 4, 10)), Some(date(2024, 4, 1)));
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidDateRange { .. }))
    ));
}

#[test]
fn test_predicates_and_combined_without_search_type() {
    let records = purchases();
    let filter = RecordFilter {
        search_text: Some("amazon".to_string()),
        category: Some("Food & Drink".to_string()),
        ..RecordFilter::default()
    };
    assert_eq!(ids(&filter_records(&records, &filter)), vec![4]);
}

#[test]
fn test_search_type_applies_only_selected_predicate() {
    let records = purchases();
    let filter = RecordFilter {
        search_text: Some("amazon".to_string()),
        category: Some("Food & Drink".to_string()),
        ..RecordFilter::default()
    };

    let by_category = filter.clone().with_search_type(SearchType::Category);
    assert_eq!(ids(&filter_records(&records, &by_category)), vec![1, 4]);

    let by_text = filter.clone().with_search_type(SearchType::Text);
    assert_eq!(ids(&filter_records(&records, &by_text)), vec![2, 4]);

    // Selected predicate has no input: nothing is filtered.
    let by_date = filter.with_search_type(SearchType::DateRange);
    assert_eq!(filter_records(&records, &by_date).len(), 4);
}

#[test]
fn test_bills_search_name_and_issuer() {
    let bills = vec![
        MonthlyBillRecord {
            id: 1,
            name: "Home internet".to_string(),
            issuer: "WE".to_string(),
            category: "Internet".to_string(),
            amount: dec!(450),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 12, 31)),
            duration: 12,
        },
        MonthlyBillRecord {
            id: 2,
            name: "Power".to_string(),
            issuer: "North Cairo Electricity".to_string(),
            category: "Electricity".to_string(),
            amount: dec!(900),
            start_date: Some(date(2024, 3, 1)),
            end_date: None,
            duration: 1,
        },
    ];

    let by_issuer = filter_records(&bills, &RecordFilter::text("cairo"));
    assert_eq!(by_issuer.len(), 1);
    assert_eq!(by_issuer[0].id, 2);

    let by_start = RecordFilter::date_range(Some(date(2024, 2, 1)), None).unwrap();
    let filtered = filter_records(&bills, &by_start);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
}

#[test]
fn test_sort_by_date_descending_stable_with_undated_last() {
    let mut records = purchases();
    records.push(purchase(5, "Tea", "Spinneys", "Food & Drink", Some(10)));
    records.push(purchase(6, "Bus", "Metro", "Transportation", None));

    let sorted = sort_by_date_descending(&records);
    assert_eq!(ids(&sorted), vec![4, 2, 5, 1, 3, 6]);
}
