use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use buteco_core::{MovementId, ProductId};

/// Kind of stock movement.
///
/// Serialized with the pt-BR labels the dashboard displays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    #[serde(rename = "Entrada")]
    In,
    #[serde(rename = "Saída")]
    Out,
    #[serde(rename = "Desperdício")]
    Waste,
}

impl MovementType {
    /// Signed stock delta for a movement of `quantity` units: receipts add,
    /// sales and waste subtract.
    pub fn signed_delta(&self, quantity: u32) -> i64 {
        match self {
            MovementType::In => i64::from(quantity),
            MovementType::Out | MovementType::Waste => -i64::from(quantity),
        }
    }

    /// Whether this movement consumes stock (sale or waste).
    pub fn is_consumption(&self) -> bool {
        matches!(self, MovementType::Out | MovementType::Waste)
    }

    /// Display label (pt-BR, matching the serialized form).
    pub fn label(&self) -> &'static str {
        match self {
            MovementType::In => "Entrada",
            MovementType::Out => "Saída",
            MovementType::Waste => "Desperdício",
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A ledger entry: one recorded change to a product's stock.
///
/// Immutable once created; the ledger is append-only and nothing is ever
/// edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: MovementId,
    /// Referenced product. Not validated against the catalog: movements for
    /// unknown products are legal but orphaned.
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: u32,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl StockMovement {
    /// Signed stock delta this movement applies to its product.
    pub fn signed_delta(&self) -> i64 {
        self.movement_type.signed_delta(self.quantity)
    }
}

/// Caller-supplied fields for recording a movement.
///
/// `id` and `timestamp` are assigned by the store at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: u32,
    pub reason: String,
}
