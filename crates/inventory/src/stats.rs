//! Aggregate statistics over the whole collection (search/sort do not apply).

use serde::Serialize;

use stockroom_core::Money;
use stockroom_products::Product;

/// Quantities strictly below this (and above zero) count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

pub fn is_low_stock(product: &Product) -> bool {
    product.quantity() > 0 && product.quantity() < LOW_STOCK_THRESHOLD
}

/// Sum of `price × quantity` over `products`.
pub fn total_inventory_value(products: &[Product]) -> Money {
    products.iter().map(Product::stock_value).sum()
}

/// Products with `0 < quantity < LOW_STOCK_THRESHOLD`, in collection order.
pub fn low_stock_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| is_low_stock(p)).cloned().collect()
}

/// Snapshot of the headline numbers shown above the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub total_value: Money,
}

impl InventorySummary {
    pub fn compute(products: &[Product]) -> Self {
        let in_stock = products.iter().filter(|p| p.in_stock()).count();
        Self {
            total_products: products.len(),
            in_stock,
            out_of_stock: products.len() - in_stock,
            low_stock: products.iter().filter(|p| is_low_stock(p)).count(),
            total_value: total_inventory_value(products),
        }
    }
}
