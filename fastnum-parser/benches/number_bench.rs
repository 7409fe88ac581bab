use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastnum_parser::{parse_double, parse_int, scan_numbers};

const INTEGERS: &[&str] = &["0", "42", "-1234", "2147483647", "-98765432"];
const DOUBLES: &[&str] = &["3.14159", "-0.25", "1.5e3", "2E-3", ".5e+2", "12345.678901"];

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("int_fast", |b| {
        b.iter(|| {
            for s in INTEGERS {
                let _ = black_box(parse_int(black_box(s)));
            }
        });
    });

    group.bench_function("int_std", |b| {
        b.iter(|| {
            for s in INTEGERS {
                let _ = black_box(black_box(s).parse::<i32>());
            }
        });
    });

    group.bench_function("double_fast", |b| {
        b.iter(|| {
            for s in DOUBLES {
                let _ = black_box(parse_double(black_box(s)));
            }
        });
    });

    group.bench_function("double_std", |b| {
        b.iter(|| {
            for s in DOUBLES {
                let _ = black_box(black_box(s).parse::<f64>());
            }
        });
    });

    group.finish();
}

fn scan_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for rows in [10, 100, 1000].iter() {
        let input = generate_rows(*rows);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &input, |b, input| {
            b.iter(|| {
                let total: f64 = scan_numbers(black_box(input))
                    .filter_map(|field| field.value.ok())
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn generate_rows(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("{},{}.{},{}e-3\n", i, i, i % 97, i * 7))
        .collect()
}

criterion_group!(benches, parse_benchmarks, scan_benchmarks);
criterion_main!(benches);
