use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use railway_core::{Result, err, ok};

fn checked_half(value: u64) -> Result<u64, &'static str> {
    if value.wrapping_rem(2) == 0 {
        ok(value.wrapping_div(2))
    } else {
        err("odd")
    }
}

fn std_checked_half(value: u64) -> std::result::Result<u64, &'static str> {
    if value.wrapping_rem(2) == 0 {
        Ok(value.wrapping_div(2))
    } else {
        Err("odd")
    }
}

fn benchmark_combinator_chains(c: &mut Criterion) {
    let inputs: Vec<u64> = (0..1000).collect();

    c.bench_function("railway_bind_chain", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|&value| {
                    checked_half(black_box(value))
                        .bind(checked_half)
                        .or(ok(0))
                        .unwrap_or(0)
                })
                .fold(0_u64, u64::wrapping_add)
        })
    });

    c.bench_function("std_and_then_chain", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|&value| {
                    std_checked_half(black_box(value))
                        .and_then(std_checked_half)
                        .or(Ok(0))
                        .unwrap_or(0)
                })
                .fold(0_u64, u64::wrapping_add)
        })
    });

    c.bench_function("contains_scan", |b| {
        let results: Vec<Result<u64, &'static str>> =
            inputs.iter().map(|&value| checked_half(value)).collect();
        b.iter(|| results.iter().filter(|result| result.contains(black_box(7_u64))).count())
    });
}

criterion_group!(benches, benchmark_combinator_chains);
criterion_main!(benches);
