//! Aggregations backing the reports view.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use buteco_inventory::{Product, ProductCategory, StockMovement};

/// Maximum number of distinct days kept in the consumption trend.
pub const TREND_MAX_DAYS: usize = 10;

/// Total units in stock across the whole catalog.
pub fn total_items(products: &[Product]) -> u64 {
    products.iter().map(|p| u64::from(p.quantity)).sum()
}

/// Units in stock per category, for a share-of-total visualization.
///
/// A category appears iff at least one product carries it; products with
/// zero quantity still register their category with a zero sum.
pub fn category_distribution(products: &[Product]) -> BTreeMap<ProductCategory, u64> {
    let mut distribution = BTreeMap::new();
    for product in products {
        *distribution.entry(product.category).or_insert(0) += u64::from(product.quantity);
    }
    distribution
}

/// One day's consumed units (sales plus waste).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionPoint {
    pub day: NaiveDate,
    pub quantity: u64,
}

/// Consumption over time: Out/Waste movements bucketed by UTC calendar day,
/// truncated to the [`TREND_MAX_DAYS`] most recent days with data, in
/// ascending chronological order.
pub fn consumption_trend(movements: &[StockMovement]) -> Vec<ConsumptionPoint> {
    let mut consumed: Vec<&StockMovement> = movements
        .iter()
        .filter(|m| m.movement_type.is_consumption())
        .collect();
    consumed.sort_by_key(|m| m.timestamp);

    // Sorted input keeps same-day movements adjacent, so buckets can be
    // built by extending the last point.
    let mut points: Vec<ConsumptionPoint> = Vec::new();
    for movement in consumed {
        let day = movement.timestamp.date_naive();
        match points.last_mut() {
            Some(last) if last.day == day => last.quantity += u64::from(movement.quantity),
            _ => points.push(ConsumptionPoint {
                day,
                quantity: u64::from(movement.quantity),
            }),
        }
    }

    let cut = points.len().saturating_sub(TREND_MAX_DAYS);
    points.split_off(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    use buteco_core::{MovementId, ProductId};
    use buteco_inventory::MovementType;

    fn at(day: &str, hour: u32) -> DateTime<Utc> {
        format!("{day}T{hour:02}:00:00Z").parse().unwrap()
    }

    fn movement(movement_type: MovementType, quantity: u32, timestamp: DateTime<Utc>) -> StockMovement {
        StockMovement {
            id: MovementId::new(),
            product_id: ProductId::new(),
            movement_type,
            quantity,
            reason: "test".to_string(),
            timestamp,
        }
    }

    fn product(category: ProductCategory, quantity: u32) -> Product {
        Product {
            id: ProductId::new(),
            name: "item".to_string(),
            category,
            supplier: "Sol".to_string(),
            quantity,
            min_quantity: 0,
            expiration_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            description: None,
        }
    }

    #[test]
    fn totals_sum_the_whole_catalog() {
        let products = vec![
            product(ProductCategory::Beverages, 8),
            product(ProductCategory::Ingredients, 20),
            product(ProductCategory::Cleaning, 0),
        ];
        assert_eq!(total_items(&products), 28);
        assert_eq!(total_items(&[]), 0);
    }

    #[test]
    fn distribution_groups_by_category() {
        let products = vec![
            product(ProductCategory::Beverages, 8),
            product(ProductCategory::Beverages, 15),
            product(ProductCategory::Ingredients, 20),
            product(ProductCategory::Cleaning, 0),
        ];

        let distribution = category_distribution(&products);
        assert_eq!(distribution[&ProductCategory::Beverages], 23);
        assert_eq!(distribution[&ProductCategory::Ingredients], 20);
        // Zero-quantity products still register their category.
        assert_eq!(distribution[&ProductCategory::Cleaning], 0);
        assert!(!distribution.contains_key(&ProductCategory::Other));
    }

    #[test]
    fn trend_ignores_receipts_and_groups_by_day() {
        let movements = vec![
            movement(MovementType::Out, 4, at("2026-08-20", 22)),
            movement(MovementType::In, 50, at("2026-08-20", 9)),
            movement(MovementType::Waste, 2, at("2026-08-20", 10)),
            movement(MovementType::Out, 3, at("2026-08-18", 12)),
        ];

        let trend = consumption_trend(&movements);
        assert_eq!(
            trend,
            vec![
                ConsumptionPoint {
                    day: NaiveDate::from_ymd_opt(2026, 8, 18).unwrap(),
                    quantity: 3,
                },
                ConsumptionPoint {
                    day: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
                    quantity: 6,
                },
            ]
        );
    }

    #[test]
    fn trend_keeps_the_most_recent_ten_days_ascending() {
        let mut movements = Vec::new();
        for day in 1..=15 {
            movements.push(movement(
                MovementType::Out,
                day,
                at(&format!("2026-08-{day:02}"), 12),
            ));
        }
        // Ledger order is most recent first; the trend must not depend on it.
        movements.reverse();

        let trend = consumption_trend(&movements);
        assert_eq!(trend.len(), TREND_MAX_DAYS);
        assert_eq!(trend[0].day, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(trend[9].day, NaiveDate::from_ymd_opt(2026, 8, 15).unwrap());
        for pair in trend.windows(2) {
            assert!(pair[0].day < pair[1].day);
        }
    }

    #[test]
    fn trend_is_empty_without_consumption() {
        let movements = vec![movement(MovementType::In, 10, at("2026-08-20", 9))];
        assert!(consumption_trend(&movements).is_empty());
        assert!(consumption_trend(&[]).is_empty());
    }
}
