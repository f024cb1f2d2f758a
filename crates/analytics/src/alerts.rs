//! Alert sets shown on the dashboard.

use chrono::NaiveDate;

use buteco_inventory::Product;

/// Expiration alert horizon, in days.
pub const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Products at or below their configured minimum quantity.
///
/// Membership flips the instant a movement crosses the threshold in either
/// direction; there is no hysteresis and no notification on crossing.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.quantity <= p.min_quantity)
        .collect()
}

/// Products expiring strictly within the next [`EXPIRY_WINDOW_DAYS`] days.
///
/// Items expiring today or already expired are excluded; they are past
/// warning, not approaching it.
pub fn expiring_soon(products: &[Product], today: NaiveDate) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| {
            let days = p.days_until_expiration(today);
            days > 0 && days <= EXPIRY_WINDOW_DAYS
        })
        .collect()
}
