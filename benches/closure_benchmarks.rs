//! Benchmarks for the closure engine and the brute-force forcing search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphinv::invariants::zero_forcing_number;
use graphinv::{ClosureEngine, ForcingRule, SimpleGraph};

/// Benchmark one full closure evaluation on paths of varying length.
fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");

    for n in [16, 32, 64].iter() {
        let graph = SimpleGraph::path(*n);
        let mut engine = ClosureEngine::new(&graph);
        let rule = ForcingRule::zero_forcing();

        group.bench_with_input(BenchmarkId::new("path", n), n, |b, _| {
            let seed = endpoint_seed(*n);
            b.iter(|| engine.is_forcing_set(black_box(&seed), &rule).unwrap())
        });
    }

    group.finish();
}

fn endpoint_seed(n: usize) -> bitvec::vec::BitVec {
    let mut seed = bitvec::bitvec![0; n];
    seed.set(0, true);
    seed
}

/// Benchmark the minimum zero forcing search on small cycles.
fn bench_zero_forcing_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_forcing_number");

    for n in [6, 8, 10].iter() {
        let graph = SimpleGraph::cycle(*n);

        group.bench_with_input(BenchmarkId::new("cycle", n), n, |b, _| {
            b.iter(|| zero_forcing_number(black_box(&graph)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_closure, bench_zero_forcing_search);
criterion_main!(benches);
