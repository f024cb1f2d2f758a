//! Inventory domain module.
//!
//! This crate contains the product catalog and stock-movement ledger for a
//! single bar/restaurant, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod movement;
pub mod product;
pub mod store;

pub use movement::{MovementType, NewMovement, StockMovement};
pub use product::{NewProduct, Product, ProductCategory};
pub use store::InventoryStore;
