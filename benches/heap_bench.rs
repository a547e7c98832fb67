use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_heap::algorithm::ShortestPathAlgorithm;
use dijkstra_heap::graph::generators::generate_random_graph;
use dijkstra_heap::{IndexedDijkstra, IndexedMinHeap, LazyDijkstra};
use rand::prelude::*;
use rand::rngs::StdRng;

fn heap_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");
    for &size in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let keys: Vec<i64> = (0..size).map(|_| rng.gen_range(1_000..1_000_000)).collect();

        group.bench_with_input(BenchmarkId::new("insert_decrease_drain", size), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::with_capacity(keys.len());
                for (vertex, &key) in keys.iter().enumerate() {
                    heap.insert(vertex, key).unwrap();
                }
                for (vertex, &key) in keys.iter().enumerate().step_by(3) {
                    heap.decrease(vertex, key / 2).unwrap();
                }
                while let Ok(entry) = heap.extract_min() {
                    black_box(entry);
                }
            })
        });
    }
    group.finish();
}

fn solvers(c: &mut Criterion) {
    let graph = generate_random_graph(10_000, 4.0, 100, 11).unwrap();
    let mut group = c.benchmark_group("dijkstra");

    group.bench_function("indexed", |b| {
        b.iter(|| IndexedDijkstra::new().compute_shortest_paths(&graph, 0).unwrap())
    });
    group.bench_function("lazy", |b| {
        b.iter(|| LazyDijkstra::new().compute_shortest_paths(&graph, 0).unwrap())
    });
    group.finish();
}

criterion_group!(benches, heap_operations, solvers);
criterion_main!(benches);
