//! Single authoritative holder of the product catalog and the movement
//! ledger. All mutation passes through it.

use chrono::{NaiveDate, Utc};

use buteco_core::{DomainError, DomainResult, MovementId, ProductId};

use crate::movement::{MovementType, NewMovement, StockMovement};
use crate::product::{NewProduct, Product, ProductCategory};

/// In-memory inventory state for one session.
///
/// Explicitly constructed and passed by handle to consumers; there is no
/// process-wide singleton, so tests can hold independent instances.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    /// Catalog in insertion order.
    products: Vec<Product>,
    /// Ledger, most recent first.
    movements: Vec<StockMovement>,
}

impl InventoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the built-in sample catalog and ledger.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    /// Current catalog snapshot, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current ledger snapshot, most recent first.
    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    /// Register a new product.
    ///
    /// Assigns a fresh id and forces `quantity = 0`; stock only enters through
    /// movements. Names are not deduplicated: the same name registered twice
    /// yields two distinct products.
    pub fn add_product(&mut self, data: NewProduct) -> DomainResult<Product> {
        if data.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if data.supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }

        let product = Product {
            id: ProductId::new(),
            name: data.name,
            category: data.category,
            supplier: data.supplier,
            quantity: 0,
            min_quantity: data.min_quantity,
            expiration_date: data.expiration_date,
            description: data.description,
        };
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace the stored product with the same id.
    ///
    /// The stored quantity is kept as-is: quantity belongs to the ledger and
    /// cannot be edited through updates.
    pub fn update_product(&mut self, updated: Product) -> DomainResult<()> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or(DomainError::NotFound)?;

        let quantity = slot.quantity;
        *slot = Product { quantity, ..updated };
        Ok(())
    }

    /// Record a stock movement and apply its delta to the referenced product.
    ///
    /// The ledger prepend and the quantity update happen in one synchronous
    /// step; readers never observe one without the other. A movement for an
    /// unknown product is still recorded (orphaned) and logged.
    pub fn add_stock_movement(&mut self, data: NewMovement) -> DomainResult<StockMovement> {
        if data.quantity == 0 {
            return Err(DomainError::validation("movement quantity must be positive"));
        }

        let movement = StockMovement {
            id: MovementId::new(),
            product_id: data.product_id,
            movement_type: data.movement_type,
            quantity: data.quantity,
            reason: data.reason,
            timestamp: Utc::now(),
        };

        self.movements.insert(0, movement.clone());

        match self.products.iter_mut().find(|p| p.id == data.product_id) {
            Some(product) => {
                // Deficits are clamped at zero, not tracked as negative stock.
                let next = i64::from(product.quantity) + movement.signed_delta();
                product.quantity = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
            }
            None => {
                tracing::warn!(
                    product_id = %data.product_id,
                    "stock movement recorded for unknown product"
                );
            }
        }

        Ok(movement)
    }

    /// Linear lookup by id.
    pub fn get_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All movements referencing `product_id`, in ledger order (most recent
    /// first). Recomputed from the current ledger on every call.
    pub fn movement_history(&self, product_id: ProductId) -> Vec<&StockMovement> {
        self.movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .collect()
    }

    fn seed(&mut self) {
        let date = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d).expect("seed date is a valid calendar date")
        };

        let samples = [
            (
                "Tomate Italiano",
                ProductCategory::Ingredients,
                "Fazenda Sol",
                20,
                10,
                date(2024, 8, 15),
                "Ideal para molhos e saladas.",
            ),
            (
                "Cerveja Artesanal IPA",
                ProductCategory::Beverages,
                "Cevada Pura",
                8,
                12,
                date(2024, 10, 20),
                "Cerveja de amargor acentuado e notas cítricas.",
            ),
            (
                "Detergente Neutro",
                ProductCategory::Cleaning,
                "LimpaTudo",
                30,
                5,
                date(2025, 1, 1),
                "Para limpeza geral de utensílios e superfícies.",
            ),
            (
                "Pão de Hambúrguer",
                ProductCategory::Ingredients,
                "Pão & Cia",
                50,
                20,
                date(2024, 7, 30),
                "Pão de brioche macio e amanteigado.",
            ),
            (
                "Vinho Tinto Malbec",
                ProductCategory::Beverages,
                "Vinhos do Sul",
                15,
                10,
                date(2026, 5, 1),
                "Vinho encorpado com notas de ameixa e baunilha.",
            ),
        ];

        for (name, category, supplier, quantity, min_quantity, expiration_date, description) in
            samples
        {
            self.products.push(Product {
                id: ProductId::new(),
                name: name.to_string(),
                category,
                supplier: supplier.to_string(),
                quantity,
                min_quantity,
                expiration_date,
                description: Some(description.to_string()),
            });
        }

        let now = Utc::now();
        let seed_movements = [
            (self.products[0].id, MovementType::In, 20, "Entrega semanal"),
            (self.products[1].id, MovementType::Out, 5, "Venda do dia"),
        ];
        for (product_id, movement_type, quantity, reason) in seed_movements {
            self.movements.push(StockMovement {
                id: MovementId::new(),
                product_id,
                movement_type,
                quantity,
                reason: reason.to_string(),
                timestamp: now,
            });
        }
    }
}
