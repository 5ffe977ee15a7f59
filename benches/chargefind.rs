use chargefind::{Catalog, FilterCriteria, LatLon, PriceRange, StationRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

/// Synthetic catalog roughly the size of a real country fetch (500 records).
fn synthetic_catalog(n: usize) -> Catalog {
    (0..n)
        .map(|i| StationRecord {
            id: i as i64,
            title: format!("Station {i}"),
            location: LatLon(8.0 + (i % 100) as f64 * 0.05, 74.0 + (i / 100) as f64 * 0.5),
            town: Some(format!("Town {}", i % 20)),
            price_per_kwh: 10.0 + (i % 16) as f64,
            avg_rating: 3.5 + (i % 16) as f64 * 0.1,
            is_operational: i % 3 != 0,
            connector_types: BTreeSet::from([if i % 2 == 0 {
                "Type 2 (Socket Only)".to_string()
            } else {
                "CCS (Type 2)".to_string()
            }]),
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let user = LatLon(9.9312, 76.2673);
    let criteria = FilterCriteria {
        min_rating: Some(4.0),
        price_range: Some(PriceRange::new(10.0, 20.0)),
        operational_only: true,
        ..Default::default()
    };

    c.bench_function("nearest_500", |b| {
        b.iter(|| catalog.nearest(black_box(user)))
    });
    c.bench_function("filter_500", |b| {
        b.iter(|| catalog.filter(black_box(&criteria)))
    });
    c.bench_function("filter_then_nearest_500", |b| {
        b.iter(|| catalog.filter(black_box(&criteria)).nearest(black_box(user)))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
