//! Placeholder data standing in for analytics the backend does not serve.
//!
//! Everything produced here is fabricated and labeled as such: series carry
//! [`Provenance::Synthetic`](crate::models::Provenance::Synthetic), and
//! per-card changes live in [`SyntheticPriceChanges`]. None of it may be fed
//! back into a real analytics contract.

pub mod series;

pub use series::{
    portfolio_series, price_change, SyntheticPriceChanges, CARD_CHANGE_SPAN, CARD_PERCENT_SPAN,
    DAILY_SWING, SEED_VALUE,
};
