//! Alerts module - read-only notifications and their severity.

mod alerts_model;

pub use alerts_model::{sort_alerts_newest_first, Alert, AlertSeverity, RawAlert};
