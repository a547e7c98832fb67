//! Dijkstra Heap - single-source shortest paths over an indexed binary min-heap
//!
//! The heap keeps a reverse index from vertex to array slot so that arbitrary
//! entries can be removed and their keys decreased in O(log n). The driver
//! runs Dijkstra's greedy loop on top of it over a static graph with
//! non-negative integer weights, recording one shortest path per vertex.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod report;

pub use algorithm::{
    dijkstra::IndexedDijkstra, lazy::LazyDijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::IndexedMinHeap;
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, GraphBuilder};

/// Vertex identifier; unique per graph, bounded by the caller's `max_nodes`
pub type VertexId = usize;

/// Non-negative edge weight
pub type Weight = i64;

/// Path length from the source
pub type Distance = i64;

/// Distance of a vertex no path has been found to yet.
///
/// Kept far below `i64::MAX` so that `UNREACHED + w` cannot overflow for any
/// accepted weight.
pub const UNREACHED: Distance = i64::MAX / 4;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} exceeds the declared maximum of {max_nodes}")]
    VertexOutOfBounds { vertex: VertexId, max_nodes: VertexId },

    #[error("Edge from {from} targets vertex {to}, which has no adjacency row")]
    UndefinedVertex { from: VertexId, to: VertexId },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(Weight),

    #[error("Edge weight {0} is not below the unreached sentinel")]
    WeightTooLarge(Weight),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(VertexId),

    #[error("Vertex {0} is already in the heap")]
    DuplicateEntry(VertexId),

    #[error("Vertex {0} is not in the heap")]
    MissingEntry(VertexId),

    #[error("Cannot decrease vertex {vertex} from {current} to {requested}")]
    NotSmaller {
        vertex: VertexId,
        current: Distance,
        requested: Distance,
    },

    #[error("Negative distance {distance} for vertex {vertex}")]
    NegativeDistance { vertex: VertexId, distance: Distance },

    #[error("Extract from an empty heap")]
    EmptyHeap,

    #[error("Heap exhausted after {processed} of {expected} vertices")]
    HeapExhausted { processed: usize, expected: usize },

    #[error("Path length to vertex {0} reaches the unreached sentinel")]
    DistanceOverflow(VertexId),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("{0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
