use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use stockroom_core::{Money, ProductId};
use stockroom_inventory::{InventoryStore, SortKey};
use stockroom_products::{Category, Product, ProductDraft};

fn seeded_store(size: u32) -> InventoryStore {
    let now = Utc::now();
    InventoryStore::with_products((1..=size).map(|i| {
        Product::new(
            ProductId::new(i),
            ProductDraft {
                name: format!("Product {:05}", (i * 7919) % size.max(1)),
                category: Category::ALL[(i % 3) as usize],
                price: Money::from_cents(u64::from((i * 37) % 100_000)),
                quantity: (i * 13) % 50,
                description: format!("Item number {i} with USB-C and HDMI ports"),
            },
            now,
        )
    }))
}

fn bench_filtered_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_products");

    for size in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(u64::from(*size)));

        for key in [SortKey::Name, SortKey::Price, SortKey::Quantity] {
            group.bench_with_input(
                BenchmarkId::new(format!("sort_by_{key}"), size),
                size,
                |b, &size| {
                    let mut store = seeded_store(size);
                    store.set_sort_key(key);
                    store.set_search_term("product 0");
                    b.iter(|| black_box(store.filtered_products()));
                },
            );
        }
    }

    group.finish();
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");
    let store = seeded_store(10_000);

    group.bench_function("total_inventory_value", |b| {
        b.iter(|| black_box(store.total_inventory_value()));
    });
    group.bench_function("low_stock_products", |b| {
        b.iter(|| black_box(store.low_stock_products()));
    });

    group.finish();
}

fn bench_adjust_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust_quantity");
    group.sample_size(1000);

    group.bench_function("adjust_last_of_10k", |b| {
        let mut store = seeded_store(10_000);
        b.iter(|| store.adjust_quantity(ProductId::new(10_000), black_box(1)));
    });

    group.finish();
}

criterion_group!(benches, bench_filtered_products, bench_aggregates, bench_adjust_quantity);
criterion_main!(benches);
