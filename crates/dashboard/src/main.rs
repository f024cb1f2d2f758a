//! Text dashboard for the Buteco inventory: seeds the sample store, prints
//! the alert and report summaries, and on explicit request generates a
//! product description.
//!
//! Usage: `buteco-dashboard [product-name]` — passing a product name triggers
//! exactly one description-generation call.

use chrono::Utc;

use buteco_ai::DescriptionGenerator;
use buteco_analytics::{
    category_distribution, consumption_trend, expiring_soon, low_stock, total_items,
};
use buteco_inventory::InventoryStore;

#[tokio::main]
async fn main() {
    buteco_observability::init();

    let store = InventoryStore::seeded();
    let today = Utc::now().date_naive();
    let products = store.products();

    println!("== Buteco — Painel de Estoque ==\n");
    println!("Total de itens em estoque: {}", total_items(products));

    let low = low_stock(products);
    let expiring = expiring_soon(products, today);
    println!("Itens com estoque baixo: {}", low.len());
    println!("Itens próximos da validade: {}\n", expiring.len());

    println!("-- Alertas --");
    if low.is_empty() && expiring.is_empty() {
        println!("Tudo certo! Nenhum alerta no momento.");
    }
    for product in &low {
        println!(
            "Estoque Baixo: {} (apenas {} unidades restantes)",
            product.name, product.quantity
        );
    }
    for product in &expiring {
        println!(
            "Validade Próxima: {} (vence em {})",
            product.name, product.expiration_date
        );
    }

    println!("\n-- Distribuição de estoque por categoria --");
    for (category, quantity) in category_distribution(products) {
        println!("{category}: {quantity}");
    }

    println!("\n-- Tendência de consumo (últimos 10 dias) --");
    let trend = consumption_trend(store.movements());
    if trend.is_empty() {
        println!("Sem consumo registrado.");
    }
    for point in trend {
        println!("{}: {}", point.day, point.quantity);
    }

    // One generation call per explicit request, never automatic.
    if let Some(name) = std::env::args().nth(1) {
        let generator = DescriptionGenerator::from_env();
        let description = generator.generate(&name).await;
        println!("\nDescrição sugerida para \"{name}\":\n{description}");
    }
}
