//! Goals module - the user's salary and savings target.

mod goals_model;

pub use goals_model::{FinancialGoal, FinancialGoalPayload, RawFinancialGoal};
