use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::metrics_traits::ExpenseEntry;
use crate::constants::{
    BILL_CATEGORIES, BILL_CATEGORY_COLORS, DEFAULT_CATEGORY_COLOR, PURCHASE_CATEGORY_COLORS,
};
use crate::utils::decimal_utils::saturating_sum;

/// One slice of a pie or donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

/// Category name to chart color. Keys are matched exactly, so `" Other"` and
/// `"Other"` are different categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, String>,
    default_color: String,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorMap {
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            default_color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }

    pub fn with(mut self, category: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(category.into(), color.into());
        self
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn purchase_defaults() -> Self {
        Self::from_pairs(&PURCHASE_CATEGORY_COLORS)
    }

    pub fn bill_defaults() -> Self {
        Self::from_pairs(&BILL_CATEGORY_COLORS)
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |map, (category, color)| map.with(*category, *color))
    }

    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }
}

/// Sums `value` per category into chart slices.
///
/// Without a canonical list, slices follow the first occurrence of each
/// category. With one, every canonical category appears in list order (zero
/// when absent) and unlisted categories follow in first-occurrence order.
pub fn aggregate_by_category<T, C, V>(
    records: &[T],
    category: C,
    value: V,
    colors: &ColorMap,
    canonical: Option<&[&str]>,
) -> Vec<CategorySlice>
where
    C: Fn(&T) -> &str,
    V: Fn(&T) -> Decimal,
{
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    if let Some(list) = canonical {
        for name in list {
            if !totals.contains_key(*name) {
                order.push(name.to_string());
                totals.insert(name.to_string(), Decimal::ZERO);
            }
        }
    }

    for record in records {
        let name = category(record);
        match totals.get_mut(name) {
            Some(total) => *total = total.saturating_add(value(record)),
            None => {
                order.push(name.to_string());
                totals.insert(name.to_string(), value(record));
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let value = totals.get(&name).copied().unwrap_or_default();
            let color = colors.color_for(&name).to_string();
            CategorySlice { name, value, color }
        })
        .collect()
}

/// Breakdown of any expense records by their own category and amount.
pub fn expense_breakdown<T: ExpenseEntry>(
    records: &[T],
    colors: &ColorMap,
    canonical: Option<&[&str]>,
) -> Vec<CategorySlice> {
    aggregate_by_category(
        records,
        |r| r.category(),
        |r| r.expense_amount(),
        colors,
        canonical,
    )
}

/// Purchase totals (price × quantity) per category, in first-occurrence order.
pub fn purchase_breakdown<T: ExpenseEntry>(purchases: &[T]) -> Vec<CategorySlice> {
    expense_breakdown(purchases, &ColorMap::purchase_defaults(), None)
}

/// Bill amounts per category over the full bill category list.
pub fn bill_breakdown<T: ExpenseEntry>(bills: &[T]) -> Vec<CategorySlice> {
    expense_breakdown(bills, &ColorMap::bill_defaults(), Some(&BILL_CATEGORIES[..]))
}

pub fn breakdown_total(slices: &[CategorySlice]) -> Decimal {
    saturating_sum(slices.iter().map(|s| s.value))
}
