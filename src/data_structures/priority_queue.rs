use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{Distance, VertexId};

/// A min-queue over `BinaryHeap` without decrease-key.
///
/// Improvements are pushed as new entries; stale ones are left in place and
/// must be skipped by the caller when popped. Used by the reference solver.
#[derive(Debug, Default)]
pub struct LazyMinQueue {
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl LazyMinQueue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        LazyMinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given tentative distance
    pub fn push(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(VertexId, Distance)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance))
    }
}
