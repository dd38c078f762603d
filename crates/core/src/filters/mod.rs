//! Filters module - search, sort and pagination for record tables.

mod filters_traits;
mod pagination;
mod record_filter;

#[cfg(test)]
mod filters_tests;

pub use filters_traits::Searchable;
pub use pagination::{page_numbers, paginate, total_pages, Page};
pub use record_filter::{filter_records, sort_by_date_descending, RecordFilter, SearchType};
