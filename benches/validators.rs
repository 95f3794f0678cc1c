//! Benchmarks for form validation primitives.
//!
//! These benchmarks measure the performance of the operations validation is
//! built on. Note: full benchmarks require the crate to expose library
//! functions; these cover the underlying primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;
use std::collections::BTreeMap;

fn bench_email_regex(c: &mut Criterion) {
    let re = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
    c.bench_function("email_regex_match", |b| {
        b.iter(|| re.is_match(black_box("beekeeper@example.com")))
    });
    c.bench_function("email_regex_reject", |b| {
        b.iter(|| re.is_match(black_box("not-an-email")))
    });
}

fn bench_amount_parsing(c: &mut Criterion) {
    c.bench_function("parse_f64_amount", |b| {
        b.iter(|| black_box("25.5").trim().parse::<f64>())
    });
    c.bench_function("parse_leading_int", |b| {
        b.iter(|| {
            let digits: String = black_box("45 kg")
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse::<u32>().unwrap_or(0)
        })
    });
}

fn bench_error_map(c: &mut Criterion) {
    c.bench_function("error_map_insert_7", |b| {
        b.iter(|| {
            let mut errors: BTreeMap<&'static str, String> = BTreeMap::new();
            for name in [
                "hiveId",
                "hiveName",
                "honeyAmount",
                "pollenAmount",
                "propolisAmount",
                "harvestDate",
                "notes",
            ] {
                errors.insert(black_box(name), black_box("required").to_string());
            }
            errors
        })
    });
}

criterion_group!(
    benches,
    bench_email_regex,
    bench_amount_parsing,
    bench_error_map
);
criterion_main!(benches);
