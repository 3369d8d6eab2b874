//! Benchmarks for the shortest path strategies and the indexed heap.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_paths::graph::generators::{generate_grid, generate_random, generate_random_dag};
use graph_paths::{shortest_paths, IndexedPriorityQueue, Strategy};

fn bench_strategies_on_dag(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_random_dag(2_000, 4.0, 1.0..10.0, &mut rng);

    let mut group = c.benchmark_group("dag_2000");
    for strategy in [Strategy::BellmanFord, Strategy::Dijkstra, Strategy::Topological] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| b.iter(|| black_box(shortest_paths(&graph, &0, strategy))),
        );
    }
    group.finish();
}

fn bench_dijkstra_on_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    for size in [1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let graph = generate_random(size, 4.0, 1.0..100.0, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(shortest_paths(graph, &0, Strategy::Dijkstra)))
        });
    }
    group.finish();
}

fn bench_components_on_grid(c: &mut Criterion) {
    let graph = generate_grid(60, 60);
    c.bench_function("scc_grid_60x60", |b| {
        b.iter(|| black_box(graph.strongly_connected_components()))
    });
}

fn bench_priority_queue(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let keys: Vec<f64> = (0..10_000).map(|_| rng.gen_range(0.0..1_000.0)).collect();

    c.bench_function("indexed_heap_push_pop_10000", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::new();
            for (value, key) in keys.iter().enumerate() {
                queue.push(value, OrderedFloat(*key));
            }
            while let Ok(entry) = queue.pop() {
                black_box(entry);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_strategies_on_dag,
    bench_dijkstra_on_random,
    bench_components_on_grid,
    bench_priority_queue
);
criterion_main!(benches);
