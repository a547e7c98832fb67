pub mod adjacency;
pub mod generators;
pub mod parser;
pub mod traits;

pub use adjacency::{AdjacencyGraph, EdgeSet, GraphBuilder};
pub use parser::{parse_adjacency, parse_adjacency_str};
pub use traits::Graph;
