//! Endpoint groups, each an `impl ApiClient` block.

mod alerts;
mod best_price;
mod bills;
mod dashboard;
mod expenses;
mod goals;
pub mod paths;
mod purchases;
mod users;

pub use dashboard::DashboardInputs;
