//! Criterion benchmarks for every registered strategy over generated inputs.
//!
//! Pin the inputs with `OVERRIDE_SEED=<seed>` to compare runs.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use sort_collection::{registry, Element, SortConfig};
use sort_test_tools::patterns;

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

// Bubble, insertion and selection sort take seconds per iteration past this.
const QUADRATIC_MAX_LEN: usize = 1_000;

fn bench_pattern(c: &mut Criterion, pattern_name: &str, pattern: fn(usize) -> Vec<Element>) {
    let config = SortConfig::default();
    let mut group = c.benchmark_group(pattern_name);

    for size in SIZES {
        let input = pattern(size);
        group.throughput(Throughput::Elements(size as u64));

        for strategy in registry::strategies() {
            if strategy.quadratic && size > QUADRATIC_MAX_LEN {
                continue;
            }

            group.bench_with_input(BenchmarkId::new(strategy.name, size), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |v| {
                        let _ = strategy.sort(black_box(v.as_mut_slice()), &config);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    bench_pattern(c, "random", |len| patterns::random_uniform(len, 0..Element::MAX));
}

fn bench_duplicates(c: &mut Criterion) {
    bench_pattern(c, "random_d8", patterns::random_duplicates);
}

fn bench_zipf(c: &mut Criterion) {
    bench_pattern(c, "random_z1", |len| patterns::random_zipf(len, 1.0));
}

criterion_group!(benches, bench_random, bench_duplicates, bench_zipf);
criterion_main!(benches);
