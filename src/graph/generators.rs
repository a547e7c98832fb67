use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::{Result, Weight};

/// Generates a random directed graph on vertices `0..n` with roughly
/// `edge_factor * n` edges and weights in `0..=max_weight`.
///
/// The same seed always yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: Weight,
    seed: u64,
) -> Result<AdjacencyGraph> {
    let mut builder = GraphBuilder::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        builder.add_vertex(v)?;
    }
    if n == 0 {
        return builder.build();
    }

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            builder.add_edge(u, v, rng.gen_range(0..=max_weight))?;
        }
    }

    builder.build()
}

/// Generates an undirected `width` x `height` grid with 4-connectivity.
/// Vertex `y * width + x` sits at column `x`, row `y`; every edge has weight
/// `weight`.
pub fn generate_grid(width: usize, height: usize, weight: Weight) -> Result<AdjacencyGraph> {
    let mut builder = GraphBuilder::new();
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            builder.add_vertex(index(x, y))?;
            if x + 1 < width {
                builder.add_undirected_edge(index(x, y), index(x + 1, y), weight)?;
            }
            if y + 1 < height {
                builder.add_undirected_edge(index(x, y), index(x, y + 1), weight)?;
            }
        }
    }

    builder.build()
}
