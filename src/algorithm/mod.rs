pub mod dijkstra;
pub mod lazy;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
