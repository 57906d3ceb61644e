//! Text and JSON renderings of the current inventory view.

use std::fmt::Write as _;

use serde::Serialize;

use stockroom_inventory::{InventoryStore, InventorySummary, SortKey};
use stockroom_products::Product;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    search_term: &'a str,
    sort_key: SortKey,
    products: Vec<Product>,
    low_stock: Vec<Product>,
    summary: InventorySummary,
}

/// Pretty-printed JSON report: derived view, low-stock list and summary.
pub fn json(store: &InventoryStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        search_term: store.search_term(),
        sort_key: store.sort_key(),
        products: store.filtered_products(),
        low_stock: store.low_stock_products(),
        summary: store.summary(),
    })
}

/// Aligned plain-text table of the derived view followed by the totals.
pub fn table(store: &InventoryStore) -> String {
    let mut out = String::new();
    let view = store.filtered_products();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Products: {} shown of {} (search: {:?}, sort: {})",
        view.len(),
        store.len(),
        store.search_term(),
        store.sort_key()
    );
    let _ = writeln!(
        out,
        "{:>4}  {:<24}  {:<12}  {:>10}  {:>8}  {}",
        "ID", "NAME", "CATEGORY", "PRICE", "QTY", "STATUS"
    );
    for p in &view {
        let _ = writeln!(
            out,
            "{:>4}  {:<24}  {:<12}  {:>10}  {:>8}  {}",
            p.id_typed(),
            p.name(),
            p.category(),
            p.price(),
            p.quantity(),
            stock_status(p)
        );
    }

    let summary = store.summary();
    let _ = writeln!(out);
    let _ = writeln!(out, "Total inventory value: {}", summary.total_value);
    let _ = writeln!(
        out,
        "In stock: {}  Out of stock: {}  Low stock: {}",
        summary.in_stock, summary.out_of_stock, summary.low_stock
    );

    let low = store.low_stock_products();
    if !low.is_empty() {
        let names: Vec<&str> = low.iter().map(Product::name).collect();
        let _ = write!(out, "Low stock items: {}", names.join(", "));
    }
    out.trim_end().to_string()
}

fn stock_status(product: &Product) -> &'static str {
    if !product.in_stock() {
        "out of stock"
    } else if stockroom_inventory::stats::is_low_stock(product) {
        "low stock"
    } else {
        "in stock"
    }
}
