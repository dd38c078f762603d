//! Best-price module - product offers and price history.

mod best_price_model;

pub use best_price_model::{
    cheapest_offer, price_history_series, visible_offers, BestPriceProduct, PriceHistoryPoint,
    RawBestPriceProduct, RawPriceHistoryPoint,
};
