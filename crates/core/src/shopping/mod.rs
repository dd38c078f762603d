//! Shopping module - the local to-buy list.

mod shopping_model;

pub use shopping_model::{ShoppingItem, ShoppingList};
