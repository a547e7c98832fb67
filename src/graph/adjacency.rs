use std::collections::{BTreeMap, BTreeSet};

use crate::graph::traits::Graph;
use crate::{Error, Result, VertexId, Weight, UNREACHED};

/// Edges leaving one vertex. A set, so repeated `(target, weight)` pairs
/// collapse while parallel edges with different weights are both kept.
pub type EdgeSet = BTreeSet<(VertexId, Weight)>;

/// An immutable directed graph stored as adjacency rows.
///
/// Built through [`GraphBuilder`]; every edge target is guaranteed to have a
/// row of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Outgoing edges for each vertex: vertex_id -> {(target_vertex, weight)}
    rows: BTreeMap<VertexId, EdgeSet>,

    edge_count: usize,
}

impl AdjacencyGraph {
    /// Returns the adjacency row of a vertex
    pub fn row(&self, vertex: VertexId) -> Option<&EdgeSet> {
        self.rows.get(&vertex)
    }

    /// Returns true if every edge has a reverse edge of the same weight
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|(&from, edges)| {
            edges.iter().all(|&(to, weight)| {
                self.rows
                    .get(&to)
                    .is_some_and(|back| back.contains(&(from, weight)))
            })
        })
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.rows.keys().copied())
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, Weight)> + '_> {
        if let Some(edges) = self.rows.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.rows.contains_key(&vertex)
    }
}

/// Incrementally assembles an [`AdjacencyGraph`].
///
/// Ids above the optional `max_nodes` bound are refused. Edge targets do not
/// create rows; [`build`](GraphBuilder::build) fails if any target was never
/// defined.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    max_nodes: Option<VertexId>,
    rows: BTreeMap<VertexId, EdgeSet>,
}

impl GraphBuilder {
    /// Creates a builder without an id bound
    pub fn new() -> Self {
        GraphBuilder::default()
    }

    /// Creates a builder that rejects ids greater than `max_nodes`
    pub fn with_max_nodes(max_nodes: VertexId) -> Self {
        GraphBuilder {
            max_nodes: Some(max_nodes),
            rows: BTreeMap::new(),
        }
    }

    pub fn max_nodes(&self) -> Option<VertexId> {
        self.max_nodes
    }

    /// Returns true if `vertex` is within the declared bound
    pub fn accepts(&self, vertex: VertexId) -> bool {
        self.max_nodes.map_or(true, |max| vertex <= max)
    }

    /// Defines a vertex with an empty row, keeping any existing row
    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<&mut Self> {
        self.check_bound(vertex)?;
        self.rows.entry(vertex).or_default();
        Ok(self)
    }

    /// Adds a directed edge, defining `from` if needed.
    ///
    /// `to` is not defined here; it needs a row of its own (via
    /// [`add_vertex`](Self::add_vertex) or as the source of another edge)
    /// before [`build`](Self::build), which otherwise fails with
    /// [`Error::UndefinedVertex`].
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<&mut Self> {
        self.check_bound(from)?;
        self.check_bound(to)?;
        check_weight(weight)?;
        self.rows.entry(from).or_default().insert((to, weight));
        Ok(self)
    }

    /// Adds the edge in both directions, defining both endpoints
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<&mut Self> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)?;
        Ok(self)
    }

    /// Replaces the whole row of `vertex`. Returns true if a row existed.
    pub fn set_row(&mut self, vertex: VertexId, edges: EdgeSet) -> Result<bool> {
        self.check_bound(vertex)?;
        for &(target, weight) in &edges {
            self.check_bound(target)?;
            check_weight(weight)?;
        }
        Ok(self.rows.insert(vertex, edges).is_some())
    }

    /// Freezes the graph, checking that every edge target has a row
    pub fn build(self) -> Result<AdjacencyGraph> {
        for (&from, edges) in &self.rows {
            if let Some(&(to, _)) = edges.iter().find(|(to, _)| !self.rows.contains_key(to)) {
                return Err(Error::UndefinedVertex { from, to });
            }
        }

        let edge_count = self.rows.values().map(|edges| edges.len()).sum();
        Ok(AdjacencyGraph {
            rows: self.rows,
            edge_count,
        })
    }

    fn check_bound(&self, vertex: VertexId) -> Result<()> {
        match self.max_nodes {
            Some(max_nodes) if vertex > max_nodes => {
                Err(Error::VertexOutOfBounds { vertex, max_nodes })
            }
            _ => Ok(()),
        }
    }
}

/// Validates that a weight is non-negative and below the unreached sentinel
pub fn check_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        Err(Error::NegativeWeight(weight))
    } else if weight >= UNREACHED {
        Err(Error::WeightTooLarge(weight))
    } else {
        Ok(())
    }
}
