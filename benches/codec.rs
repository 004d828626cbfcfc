use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_tob::{from_slice, to_vec, Reader, TobValue, Writer};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_vec(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };
    let bytes = to_vec(&user).unwrap();

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_slice::<User>(black_box(&bytes)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10u32, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_vec(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10u32, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let bytes = to_vec(&products).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| from_slice::<Vec<Product>>(black_box(&bytes)))
        });
    }
    group.finish();
}

fn benchmark_token_walk(c: &mut Criterion) {
    let mut writer = Writer::new();
    writer.begin_array();
    writer.integer(1000);
    for i in 0..1000 {
        writer.integer(i);
    }
    writer.end_array().unwrap();
    let bytes = writer.into_bytes();

    c.bench_function("token_walk_1000_ints", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&bytes));
            let mut total = 0i64;
            loop {
                if let Ok(v) = reader.value::<i64>() {
                    total += v;
                }
                if !reader.next().unwrap() {
                    break;
                }
            }
            total
        })
    });
}

fn benchmark_value_tree(c: &mut Criterion) {
    let mut root = TobValue::Null;
    for i in 0..100 {
        root[&format!("key{}", i)[..]] = TobValue::from(i);
    }
    let bytes = to_vec(&root).unwrap();

    c.bench_function("decode_value_tree_100_keys", |b| {
        b.iter(|| from_slice::<TobValue>(black_box(&bytes)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_token_walk,
    benchmark_value_tree
);
criterion_main!(benches);
