use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fastcase::{
    convert_keys, to_camel_case, to_camel_case_fast, to_snake_case, to_snake_case_fast, to_value,
    Engine, KeyOptions, Value,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Order {
    order_id: u32,
    customer_name: String,
    shipping_address: Address,
    line_items: Vec<LineItem>,
}

#[derive(Serialize, Clone)]
struct Address {
    street_line_one: String,
    postal_code: String,
}

#[derive(Serialize, Clone)]
struct LineItem {
    product_sku: String,
    unit_price: f64,
    item_quantity: u32,
}

fn snake_inputs() -> Vec<String> {
    (0..100).map(|i| format!("foo_bar_baz_qux_{}", i)).collect()
}

fn camel_inputs() -> Vec<String> {
    (0..100).map(|i| format!("fooBarBazQux{}", i)).collect()
}

fn benchmark_to_camel_case(c: &mut Criterion) {
    let inputs = snake_inputs();
    let mut group = c.benchmark_group("to_camel_case");

    group.bench_function("pattern", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(to_camel_case(black_box(s)));
            }
        })
    });
    group.bench_function("scanner", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(to_camel_case_fast(black_box(s)));
            }
        })
    });
    group.finish();
}

fn benchmark_to_snake_case(c: &mut Criterion) {
    let inputs = camel_inputs();
    let mut group = c.benchmark_group("to_snake_case");

    group.bench_function("pattern", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(to_snake_case(black_box(s)));
            }
        })
    });
    group.bench_function("scanner", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(to_snake_case_fast(black_box(s)));
            }
        })
    });
    group.finish();
}

fn orders(count: u32) -> Value {
    let orders: Vec<Order> = (0..count)
        .map(|i| Order {
            order_id: i,
            customer_name: format!("Customer {}", i),
            shipping_address: Address {
                street_line_one: format!("{} Main St", i),
                postal_code: "12345".to_string(),
            },
            line_items: (0..3)
                .map(|j| LineItem {
                    product_sku: format!("SKU{}", j),
                    unit_price: 9.99 + f64::from(j),
                    item_quantity: j,
                })
                .collect(),
        })
        .collect();
    to_value(&orders).expect("orders serialize")
}

fn benchmark_deep_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("camel_case_keys");

    for size in [10u32, 100, 500].iter() {
        let value = orders(*size);
        for engine in [Engine::Pattern, Engine::Scanner] {
            let options = KeyOptions::camel().with_engine(engine);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", engine), size),
                &value,
                |b, value| b.iter(|| convert_keys(black_box(value.clone()), &options)),
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_to_camel_case,
    benchmark_to_snake_case,
    benchmark_deep_keys
);
criterion_main!(benches);
