use std::collections::{BTreeMap, HashSet};

use log::warn;

use crate::graph::Graph;
use crate::{Distance, Result, VertexId, UNREACHED};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Source vertex ID
    pub source: VertexId,

    /// Final distance of every vertex; [`UNREACHED`] if no path exists
    pub distances: BTreeMap<VertexId, Distance>,

    /// Shortest path to each reached vertex, source excluded. The source
    /// maps to an empty path.
    pub paths: BTreeMap<VertexId, Vec<VertexId>>,

    /// Vertices in the order their distances were finalized
    pub order: Vec<VertexId>,
}

impl ShortestPathResult {
    /// Builds a result from a predecessor table, walking each reached vertex
    /// back to the source.
    pub fn from_predecessors(
        source: VertexId,
        distances: BTreeMap<VertexId, Distance>,
        predecessors: &BTreeMap<VertexId, VertexId>,
        order: Vec<VertexId>,
    ) -> Self {
        let mut paths = BTreeMap::new();
        for (&vertex, &distance) in &distances {
            if distance >= UNREACHED {
                continue;
            }
            if let Some(path) = walk_back(source, vertex, predecessors, distances.len()) {
                paths.insert(vertex, path);
            }
        }

        ShortestPathResult {
            source,
            distances,
            paths,
            order,
        }
    }

    /// Final distance of `vertex`, or None if it is unknown or unreachable
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances
            .get(&vertex)
            .copied()
            .filter(|&distance| distance < UNREACHED)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|&&d| d < UNREACHED).count()
    }

    /// Stored path to `vertex`, source excluded
    pub fn path(&self, vertex: VertexId) -> Option<&[VertexId]> {
        if !self.is_reachable(vertex) {
            return None;
        }
        self.paths.get(&vertex).map(Vec::as_slice)
    }

    /// Full route from the source to `vertex`, both ends included
    pub fn route(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let path = self.path(vertex)?;
        Some(std::iter::once(self.source).chain(path.iter().copied()).collect())
    }

    /// Distances in finalization order
    pub fn finalized_distances(&self) -> Vec<Distance> {
        self.order
            .iter()
            .filter_map(|vertex| self.distances.get(vertex).copied())
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G: Graph> {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

fn walk_back(
    source: VertexId,
    target: VertexId,
    predecessors: &BTreeMap<VertexId, VertexId>,
    limit: usize,
) -> Option<Vec<VertexId>> {
    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = target;

    while current != source {
        if !visited.insert(current) || path.len() > limit {
            warn!("Cycle detected in path reconstruction at vertex {}", current);
            return None;
        }
        path.push(current);
        current = *predecessors.get(&current)?;
    }

    path.reverse();
    Some(path)
}
