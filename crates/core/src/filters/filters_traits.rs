use crate::metrics::ExpenseEntry;

/// A record that the history and bills tables can filter.
///
/// Text search runs over `search_fields`; category and date come from
/// [`ExpenseEntry`].
pub trait Searchable: ExpenseEntry {
    fn search_fields(&self) -> Vec<&str>;
}
