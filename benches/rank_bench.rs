//! Criterion benchmarks for u-rank data structures.
//!
//! Uses synthetic workloads (random triage streams, random road
//! networks) to measure pure structure overhead independent of any
//! domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_rank::graph::WeightedGraph;
use u_rank::ranking::{rank_entries, Priority, PriorityRanker};

fn random_class(rng: &mut StdRng) -> Priority {
    match rng.random_range(0..4u8) {
        0 => Priority::Low,
        1 => Priority::Medium,
        2 => Priority::High,
        _ => Priority::Critical,
    }
}

fn random_stream(size: usize, seed: u64) -> Vec<(Priority, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| (random_class(&mut rng), rng.random_range(0..1_000_000i64)))
        .collect()
}

// ===========================================================================
// Heap churn: enqueue a full stream, then drain it
// ===========================================================================

fn bench_ranker_enqueue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranker_enqueue_drain");
    for size in [100usize, 1_000, 10_000] {
        let stream = random_stream(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &stream, |b, stream| {
            b.iter(|| {
                let mut ranker = PriorityRanker::with_capacity(stream.len());
                for &(class, key) in stream {
                    ranker.enqueue(key, class, key);
                }
                black_box(ranker.into_sorted_vec())
            });
        });
    }
    group.finish();
}

// ===========================================================================
// One-shot sort over the same streams
// ===========================================================================

fn bench_one_shot_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_entries");
    for size in [100usize, 1_000, 10_000] {
        let stream = random_stream(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &stream, |b, stream| {
            b.iter(|| {
                let entries: Vec<(i64, Priority, i64)> =
                    stream.iter().map(|&(class, key)| (key, class, key)).collect();
                black_box(rank_entries(entries))
            });
        });
    }
    group.finish();
}

// ===========================================================================
// Shortest path on a connected random network
// ===========================================================================

fn random_network(size: u32, seed: u64) -> WeightedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::new();
    for v in 0..size {
        graph.add_vertex(v);
    }
    // Spine guarantees connectivity; chords add detours worth exploring.
    for v in 0..size - 1 {
        graph.add_edge(v, v + 1, rng.random_range(1..10i64)).unwrap();
    }
    for _ in 0..size * 2 {
        let u = rng.random_range(0..size);
        let v = rng.random_range(0..size);
        graph.add_edge(u, v, rng.random_range(1..100i64)).unwrap();
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for size in [100u32, 1_000] {
        let graph = random_network(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(graph.shortest_path(&0, &(size - 1))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ranker_enqueue_drain,
    bench_one_shot_rank,
    bench_shortest_path
);
criterion_main!(benches);
