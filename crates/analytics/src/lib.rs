//! Derived analytics over inventory snapshots.
//!
//! Pure, side-effect-free functions over a point-in-time `(products,
//! movements)` snapshot. Everything is recomputed on each call; there is no
//! caching and no incremental update path. Date-sensitive functions take
//! `today` explicitly so results stay deterministic under test.

pub mod alerts;
pub mod reports;

pub use alerts::{expiring_soon, low_stock, EXPIRY_WINDOW_DAYS};
pub use reports::{
    category_distribution, consumption_trend, total_items, ConsumptionPoint, TREND_MAX_DAYS,
};
