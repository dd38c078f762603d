use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filters_traits::Searchable;
use crate::errors::{Result, ValidationError};
use crate::metrics::ExpenseEntry;

/// The single predicate selected in the search-type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    Text,
    Category,
    DateRange,
}

/// Filter inputs of the history and bills tables.
///
/// Empty text, an empty category and missing dates are inactive. With no
/// `search_type` every active predicate must match; with one, only that
/// predicate is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    pub search_text: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search_type: Option<SearchType>,
}

impl RecordFilter {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Inclusive date range. Either bound may be open.
    pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ValidationError::InvalidDateRange { start, end }.into());
            }
        }
        Ok(Self {
            start_date: start,
            end_date: end,
            ..Self::default()
        })
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }

    // Category keys are compared verbatim; " Other" is not "Other".
    fn category_key(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn has_date_range(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    pub fn is_active(&self) -> bool {
        match self.search_type {
            Some(SearchType::Text) => self.needle().is_some(),
            Some(SearchType::Category) => self.category_key().is_some(),
            Some(SearchType::DateRange) => self.has_date_range(),
            None => self.needle().is_some() || self.category_key().is_some() || self.has_date_range(),
        }
    }

    fn matches_text<T: Searchable>(&self, record: &T) -> bool {
        match self.needle() {
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
            None => true,
        }
    }

    fn matches_category<T: ExpenseEntry>(&self, record: &T) -> bool {
        match self.category_key() {
            Some(category) => record.category() == category,
            None => true,
        }
    }

    fn matches_date<T: ExpenseEntry>(&self, record: &T) -> bool {
        if !self.has_date_range() {
            return true;
        }
        let Some(date) = record.expense_date() else {
            return false;
        };
        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        match self.search_type {
            Some(SearchType::Text) => self.matches_text(record),
            Some(SearchType::Category) => self.matches_category(record),
            Some(SearchType::DateRange) => self.matches_date(record),
            None => {
                self.matches_text(record) && self.matches_category(record) && self.matches_date(record)
            }
        }
    }
}

/// Records matching `filter`, in input order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], filter: &RecordFilter) -> Vec<&'a T> {
    if !filter.is_active() {
        return records.iter().collect();
    }
    records.iter().filter(|r| filter.matches(*r)).collect()
}

/// Newest first. Stable for equal dates; undated records go last.
pub fn sort_by_date_descending<T: ExpenseEntry>(records: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| match (a.expense_date(), b.expense_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted
}
