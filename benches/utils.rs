use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genutils::U;

fn benchmark_to_camel_case(c: &mut Criterion) {
    let input = "the quick brown fox jumps over the lazy dog ".repeat(20);

    c.bench_function("U::to_camel_case", |b| {
        b.iter(|| {
            let value = U::to_camel_case(black_box(&input));
            black_box(value);
        })
    });
}

fn benchmark_is_password_strong(c: &mut Criterion) {
    c.bench_function("U::is_password_strong", |b| {
        b.iter(|| {
            let value = U::is_password_strong(black_box("CorrectHorse9!Battery"));
            black_box(value);
        })
    });
}

fn benchmark_duplicates(c: &mut Criterion) {
    let input: Vec<u32> = (0..10_000).map(|i| i % 2_500).collect();

    c.bench_function("U::duplicates", |b| {
        b.iter(|| {
            let value = U::duplicates(black_box(&input));
            black_box(value);
        })
    });
}

fn benchmark_get_unique_items(c: &mut Criterion) {
    let input: Vec<u32> = (0..1_000).map(|i| i % 100).collect();

    c.bench_function("U::get_unique_items", |b| {
        b.iter(|| {
            let value = U::get_unique_items(Some(black_box(input.as_slice())));
            black_box(value)
        })
    });
}

fn benchmark_calculate_average(c: &mut Criterion) {
    let input: Vec<i32> = (0..10_000).collect();

    c.bench_function("U::calculate_average", |b| {
        b.iter(|| {
            let value = U::calculate_average(Some(black_box(input.as_slice())));
            black_box(value)
        })
    });
}

criterion_group!(
    benches,
    benchmark_to_camel_case,
    benchmark_is_password_strong,
    benchmark_duplicates,
    benchmark_get_unique_items,
    benchmark_calculate_average
);
criterion_main!(benches);
