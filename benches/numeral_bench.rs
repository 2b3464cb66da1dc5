//! Benchmark for numeral naming and currency conversion.
//!
//! Measures each magnitude tier and the full sanitized conversion.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use numerales::numeral::{hundreds, millions, thousands};
use numerales::{CurrencyConfig, to_words, to_words_capitalized};
use std::hint::black_box;

// =============================================================================
// Numeral Tier Benchmarks
// =============================================================================

fn benchmark_numeral_tiers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("numeral_tiers");

    group.bench_function("hundreds", |bencher| {
        bencher.iter(|| hundreds(black_box(777)));
    });

    group.bench_function("thousands", |bencher| {
        bencher.iter(|| thousands(black_box(521_777)));
    });

    for number in [7_u32, 1_000_000, 123_456_789, 999_999_999] {
        group.bench_with_input(
            BenchmarkId::new("millions", number),
            &number,
            |bencher, &number| {
                bencher.iter(|| millions(black_box(number)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn benchmark_conversion(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("conversion");
    let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");

    group.bench_function("to_words", |bencher| {
        bencher.iter(|| to_words(black_box(1_500_450.04), &config));
    });

    group.bench_function("to_words_capitalized", |bencher| {
        bencher.iter(|| to_words_capitalized(black_box(1_500_450.04), &config));
    });

    group.bench_function("batch_of_thousand", |bencher| {
        bencher.iter(|| {
            (0..1_000)
                .map(|index| to_words(f64::from(index) * 1_234.56, &config))
                .filter(Result::is_ok)
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_numeral_tiers, benchmark_conversion);
criterion_main!(benches);
