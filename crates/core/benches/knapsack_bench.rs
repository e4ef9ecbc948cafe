//! Benchmarks for the knapsack dynamic program.
//!
//! Measures solve time at various item counts and capacities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stowage_core::{KnapsackItem, KnapsackSolver};

fn bench_knapsack_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_solve");
    group.sample_size(20);

    for &n in &[10, 50, 200] {
        let items: Vec<KnapsackItem> = (0..n)
            .map(|i| {
                let size = 1 + (i as u64 * 7) % 40;
                let value = 1.0 + (i as f64 * 13.0) % 90.0;
                KnapsackItem::new(size, value)
            })
            .collect();
        let solver = KnapsackSolver::default_config();

        group.bench_with_input(BenchmarkId::new("items", n), &items, |b, items| {
            b.iter(|| {
                let solution = solver.solve(black_box(items), black_box(2_000));
                black_box(solution)
            })
        });
    }
    group.finish();
}

fn bench_knapsack_capacity(c: &mut Criterion) {
    let items: Vec<KnapsackItem> = (0..100)
        .map(|i| KnapsackItem::new(1 + (i as u64 * 11) % 60, (i as f64 * 3.0) % 50.0))
        .collect();
    let solver = KnapsackSolver::default_config();

    let mut group = c.benchmark_group("knapsack_capacity");
    group.sample_size(20);
    for &capacity in &[1_000_u64, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::new("capacity", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let solution = solver.solve(black_box(&items), black_box(capacity));
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_solve, bench_knapsack_capacity);
criterion_main!(benches);
