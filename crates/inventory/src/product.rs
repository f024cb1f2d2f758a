use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use buteco_core::ProductId;

/// Fixed set of catalog categories.
///
/// Serialized with the pt-BR labels the dashboard displays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Bebidas")]
    Beverages,
    #[serde(rename = "Ingredientes")]
    Ingredients,
    #[serde(rename = "Limpeza")]
    Cleaning,
    #[serde(rename = "Outros")]
    Other,
}

impl ProductCategory {
    /// Display label (pt-BR, matching the serialized form).
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Beverages => "Bebidas",
            ProductCategory::Ingredients => "Ingredientes",
            ProductCategory::Cleaning => "Limpeza",
            ProductCategory::Other => "Outros",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product.
///
/// `quantity` is owned by the movement ledger: it starts at 0 and is only
/// ever changed by [`crate::store::InventoryStore::add_stock_movement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub supplier: String,
    pub quantity: u32,
    pub min_quantity: u32,
    /// Calendar date, no time component.
    pub expiration_date: NaiveDate,
    pub description: Option<String>,
}

impl Product {
    /// Signed days until this product expires, relative to `today`.
    ///
    /// Zero means it expires today; negative means it is already expired.
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }
}

/// Caller-supplied fields for product creation.
///
/// `id` and `quantity` are assigned by the store; quantity always starts at 0
/// and is built up through movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: ProductCategory,
    pub supplier: String,
    pub min_quantity: u32,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_expiration_is_signed() {
        let product = Product {
            id: ProductId::new(),
            name: "Tomate".to_string(),
            category: ProductCategory::Ingredients,
            supplier: "Sol".to_string(),
            quantity: 0,
            min_quantity: 10,
            expiration_date: date(2026, 9, 4),
            description: None,
        };

        assert_eq!(product.days_until_expiration(date(2026, 8, 28)), 7);
        assert_eq!(product.days_until_expiration(date(2026, 9, 4)), 0);
        assert_eq!(product.days_until_expiration(date(2026, 9, 10)), -6);
    }

    #[test]
    fn category_serializes_with_display_label() {
        for category in [
            ProductCategory::Beverages,
            ProductCategory::Ingredients,
            ProductCategory::Cleaning,
            ProductCategory::Other,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
