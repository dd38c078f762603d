//! Bills module - monthly bill records and drafts.

mod bills_model;

pub use bills_model::{parse_bills, BillDraft, MonthlyBillRecord, RawMonthlyBillRecord};
