//! Demo catalog used to seed a fresh inventory.

use chrono::{DateTime, Utc};

use stockroom_core::{Money, ProductId};

use crate::product::{Category, Product, ProductDraft};

/// The five demo products, ids 1 through 5, all stamped with `at`.
pub fn sample_catalog(at: DateTime<Utc>) -> Vec<Product> {
    let rows: [(&str, Category, u64, u32, &str); 5] = [
        (
            "Laptop Pro 15\"",
            Category::Electronics,
            129_999,
            25,
            "High-performance laptop with 16GB RAM",
        ),
        (
            "Wireless Mouse",
            Category::Accessories,
            2_999,
            4,
            // No "USB" here, so searching "usb" only finds the hub.
            "Ergonomic wireless mouse with Bluetooth",
        ),
        (
            "Antivirus Software",
            Category::Software,
            4_999,
            100,
            "1-year subscription for 3 devices",
        ),
        (
            "USB-C Hub",
            Category::Accessories,
            7_999,
            0,
            "7-in-1 USB-C hub with HDMI",
        ),
        (
            "Monitor 27\"",
            Category::Electronics,
            39_999,
            15,
            "4K UHD IPS Display",
        ),
    ];

    rows.into_iter()
        .zip(1u32..)
        .map(|((name, category, cents, quantity, description), id)| {
            Product::new(
                ProductId::new(id),
                ProductDraft {
                    name: name.to_string(),
                    category,
                    price: Money::from_cents(cents),
                    quantity,
                    description: description.to_string(),
                },
                at,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_sequential_ids_and_consistent_stock_flags() {
        let products = sample_catalog(Utc::now());
        let ids: Vec<u32> = products.iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let hub = &products[3];
        assert_eq!(hub.name(), "USB-C Hub");
        assert!(!hub.in_stock());
        assert!(products.iter().filter(|p| p.id_typed() != hub.id_typed()).all(Product::in_stock));
    }
}
