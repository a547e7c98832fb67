use std::time::{Duration, Instant};

use dijkstra_heap::algorithm::ShortestPathAlgorithm;
use dijkstra_heap::graph::generators::generate_random_graph;
use dijkstra_heap::graph::{AdjacencyGraph, Graph};
use dijkstra_heap::{IndexedDijkstra, LazyDijkstra, ShortestPathResult};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &AdjacencyGraph,
    source: usize,
) -> dijkstra_heap::Result<(Duration, ShortestPathResult)>
where
    A: ShortestPathAlgorithm<AdjacencyGraph>,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?}",
        result.reachable_count(),
        duration
    );

    Ok((duration, result))
}

fn main() -> dijkstra_heap::Result<()> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let max_weight = 100;

    println!("=====================================================");
    println!("Benchmark: IndexedDijkstra vs LazyDijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let indexed = IndexedDijkstra::new();
    let lazy = LazyDijkstra::new();
    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, max_weight, seed as u64)?;
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (indexed_time, indexed_result) = benchmark_algorithm(&indexed, &graph, source)?;
        let (lazy_time, lazy_result) = benchmark_algorithm(&lazy, &graph, source)?;

        if indexed_result.distances != lazy_result.distances {
            println!("WARNING: distance tables differ for {} vertices", size);
        }

        results.push((size, indexed_time, lazy_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Indexed (ms)", "Lazy (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, indexed_time, lazy_time) in &results {
        let ratio = indexed_time.as_secs_f64() / lazy_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            indexed_time.as_millis(),
            lazy_time.as_millis(),
            ratio
        );
    }

    Ok(())
}
