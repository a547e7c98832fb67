use std::fmt::Debug;

use crate::{VertexId, Weight};

/// Trait representing a static weighted directed graph
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertex ids in ascending order
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges from `from` to `to`
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
