//! EcoFi Core - Domain records, metrics, and session storage.
//!
//! This crate contains the client-side business logic for the EcoFi
//! dashboard. It never performs network I/O: records arrive as JSON from the
//! `ecofi-client` crate, are normalized here once, and are then turned into
//! the numbers and chart series the dashboard displays.

pub mod alerts;
pub mod best_price;
pub mod bills;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod filters;
pub mod goals;
pub mod metrics;
pub mod purchases;
pub mod session;
pub mod shopping;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
