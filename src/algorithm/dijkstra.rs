use std::collections::{BTreeMap, HashSet};

use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result, VertexId, UNREACHED};

/// Dijkstra's algorithm over an [`IndexedMinHeap`].
///
/// Every vertex is seeded into the heap up front, the source at 0 and the
/// rest at [`UNREACHED`]. Exactly one vertex is finalized per iteration;
/// improving relaxations lower the target's key in place with `decrease`
/// and rewrite its path as the finalized predecessor's path plus itself.
/// Vertices that are never reached keep the sentinel distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexedDijkstra;

impl IndexedDijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        IndexedDijkstra
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for IndexedDijkstra {
    fn name(&self) -> &'static str {
        "IndexedDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        debug!(
            "{}: source {}, {} vertices, {} edges",
            <Self as ShortestPathAlgorithm<G>>::name(self),
            source,
            n,
            graph.edge_count()
        );

        let mut heap = IndexedMinHeap::with_capacity(n);
        for vertex in graph.vertices() {
            let initial = if vertex == source { 0 } else { UNREACHED };
            heap.insert(vertex, initial)?;
        }

        let mut distances = BTreeMap::new();
        let mut processed = HashSet::with_capacity(n);
        let mut paths: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
        let mut order = Vec::with_capacity(n);
        paths.insert(source, Vec::new());

        for _ in 0..n {
            let (vertex, distance) = heap.extract_min().map_err(|_| Error::HeapExhausted {
                processed: order.len(),
                expected: n,
            })?;
            distances.insert(vertex, distance);
            processed.insert(vertex);
            order.push(vertex);
            trace!("finalized vertex {} at distance {}", vertex, distance);

            // Nothing is reachable through an unreached vertex
            if distance >= UNREACHED {
                continue;
            }

            for (target, weight) in graph.outgoing_edges(vertex) {
                if processed.contains(&target) {
                    continue;
                }
                if weight < 0 {
                    return Err(Error::NegativeWeight(weight));
                }
                let current = heap.distance(target).ok_or(Error::UndefinedVertex {
                    from: vertex,
                    to: target,
                })?;
                let candidate = distance
                    .checked_add(weight)
                    .ok_or(Error::DistanceOverflow(target))?;

                // Keys never exceed UNREACHED, so a candidate at or past it never wins
                if candidate < current {
                    heap.decrease(target, candidate)?;
                    let mut path = paths.get(&vertex).cloned().unwrap_or_default();
                    path.push(target);
                    paths.insert(target, path);
                }
            }
        }

        let result = ShortestPathResult {
            source,
            distances,
            paths,
            order,
        };
        debug!(
            "{}: {} of {} vertices reachable",
            <Self as ShortestPathAlgorithm<G>>::name(self),
            result.reachable_count(),
            n
        );
        Ok(result)
    }
}
