//! Benchmarks for the directory query pipeline.
//!
//! Run with: cargo bench -p atlas-core

use atlas_core::{parse_hdi, AtlasConfig, Country, Directory, FavoritesStore, HdiTable};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Build a directory with N synthetic countries spread over regions and hours.
fn build_directory(count: usize) -> Directory {
    let countries = (0..count)
        .map(|i| {
            let offset = (i % 24) as i32 - 11;
            let tz = if offset == 0 {
                "UTC".to_string()
            } else {
                format!("UTC{offset:+03}:00")
            };
            Country {
                name: format!("Country {i}"),
                capital: format!("Capital {i}"),
                region: REGIONS[i % REGIONS.len()].to_string(),
                timezones: vec![tz.clone()],
                primary_timezone: tz,
                current_time: format!("{:02}:30", i % 24),
                ..Default::default()
            }
        })
        .collect();
    Directory::new(countries, HdiTable::new(), FavoritesStore::default())
}

fn bench_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer");

    for count in [250, 2_500, 25_000] {
        let directory = build_directory(count);

        group.bench_with_input(BenchmarkId::new("unfiltered_page_1", count), &count, |b, _| {
            b.iter(|| black_box(directory.answer(black_box(&[("page", "1")]))).is_normal());
        });

        group.bench_with_input(BenchmarkId::new("region_and_search", count), &count, |b, _| {
            let params = [("region", "Asia"), ("q", "capital 1")];
            b.iter(|| black_box(directory.answer(black_box(&params))).is_normal());
        });

        group.bench_with_input(BenchmarkId::new("time_range", count), &count, |b, _| {
            let params = [("timerange", "evening"), ("page", "2")];
            b.iter(|| black_box(directory.answer(black_box(&params))).is_normal());
        });
    }

    group.finish();
}

fn bench_hdi_parse(c: &mut Criterion) {
    let path = AtlasConfig::default_data_dir().join("hdi_sample.csv");
    let Ok(text) = std::fs::read_to_string(&path) else {
        return;
    };

    c.bench_function("parse_hdi_sample", |b| {
        b.iter(|| black_box(parse_hdi(black_box(&text))).len());
    });
}

criterion_group!(benches, bench_answer, bench_hdi_parse);
criterion_main!(benches);
