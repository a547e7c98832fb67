use std::collections::{BTreeMap, HashSet};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinQueue;
use crate::graph::Graph;
use crate::{Distance, Error, Result, VertexId, UNREACHED};

/// Classic Dijkstra with lazy deletion and a predecessor table.
///
/// Serves as an independent reference for [`IndexedDijkstra`](super::dijkstra::IndexedDijkstra):
/// distances must agree, paths may differ where equal-length alternatives exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyDijkstra;

impl LazyDijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        LazyDijkstra
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for LazyDijkstra {
    fn name(&self) -> &'static str {
        "LazyDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let mut distances: BTreeMap<VertexId, Distance> =
            graph.vertices().map(|v| (v, UNREACHED)).collect();
        let mut predecessors = BTreeMap::new();
        let mut settled = HashSet::with_capacity(distances.len());
        let mut order = Vec::with_capacity(distances.len());
        distances.insert(source, 0);

        let mut queue = LazyMinQueue::new();
        queue.push(source, 0);

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if distances.get(&u).map_or(true, |&current| current < dist_u) {
                continue;
            }
            if !settled.insert(u) {
                continue;
            }
            order.push(u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < 0 {
                    return Err(Error::NegativeWeight(weight));
                }
                let current = *distances
                    .get(&v)
                    .ok_or(Error::UndefinedVertex { from: u, to: v })?;
                let new_dist = dist_u
                    .checked_add(weight)
                    .ok_or(Error::DistanceOverflow(v))?;

                if new_dist < current {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult::from_predecessors(
            source,
            distances,
            &predecessors,
            order,
        ))
    }
}
