//! Expenses module - payloads of the aggregate expense queries.

mod expenses_model;

pub use expenses_model::{
    parse_total_expenses, ExpensePoint, MonthlyExpense, RawExpensePoint, RawMonthlyExpense,
};
