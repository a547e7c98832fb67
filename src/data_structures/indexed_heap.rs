use std::collections::HashMap;

use crate::{Distance, Error, Result, VertexId};

/// Distance written over an entry to force it to the root before removal.
/// Inserts reject negative distances, so this is below every live entry.
const FORCE_TO_ROOT: Distance = -1;

/// Distance assumed for a child slot past the end of the array
const MISSING_CHILD: Distance = Distance::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    vertex: VertexId,
    distance: Distance,
}

/// Array-backed binary min-heap of (vertex, distance) entries with a reverse
/// index from vertex to array slot.
///
/// The index makes `contains`, `distance` and `decrease` independent of where
/// an entry sits in the array. The array itself is never exposed; every
/// reordering goes through a single swap routine that rewrites both sides.
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    /// Heap-ordered entries; `entries[0]` is the minimum
    entries: Vec<HeapEntry>,

    /// vertex -> index into `entries`
    positions: HashMap<VertexId, usize>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl IndexedMinHeap {
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `vertex` has a live entry
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// Current tentative distance of `vertex`, if it is in the heap
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.positions
            .get(&vertex)
            .map(|&index| self.entries[index].distance)
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(VertexId, Distance)> {
        self.entries.first().map(|e| (e.vertex, e.distance))
    }

    /// Adds a new entry and restores heap order by bubbling it up.
    ///
    /// Fails if the vertex is already present or the distance is negative.
    pub fn insert(&mut self, vertex: VertexId, distance: Distance) -> Result<()> {
        if self.contains(vertex) {
            return Err(Error::DuplicateEntry(vertex));
        }
        if distance < 0 {
            return Err(Error::NegativeDistance { vertex, distance });
        }

        let index = self.entries.len();
        self.entries.push(HeapEntry { vertex, distance });
        self.positions.insert(vertex, index);
        self.bubble_up(index);
        Ok(())
    }

    /// Removes and returns the entry with the smallest distance
    pub fn extract_min(&mut self) -> Result<(VertexId, Distance)> {
        let root = self.remove_root().ok_or(Error::EmptyHeap)?;
        Ok((root.vertex, root.distance))
    }

    /// Lowers the distance of a live vertex.
    ///
    /// Implemented as delete + reinsert: the entry is forced to the root with
    /// a negative distance, removed like a minimum, then inserted afresh with
    /// `new_distance`. Fails unless `new_distance` is strictly smaller than the
    /// current one.
    pub fn decrease(&mut self, vertex: VertexId, new_distance: Distance) -> Result<()> {
        let index = *self
            .positions
            .get(&vertex)
            .ok_or(Error::MissingEntry(vertex))?;
        let current = self.entries[index].distance;
        if new_distance >= current {
            return Err(Error::NotSmaller {
                vertex,
                current,
                requested: new_distance,
            });
        }
        if new_distance < 0 {
            return Err(Error::NegativeDistance {
                vertex,
                distance: new_distance,
            });
        }

        self.entries[index].distance = FORCE_TO_ROOT;
        self.bubble_up(index);
        let removed = self.remove_root().ok_or(Error::MissingEntry(vertex))?;
        debug_assert_eq!(removed.vertex, vertex);

        self.insert(vertex, new_distance)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Checks that every parent is no larger than its children
    pub fn check_heap_order(&self) -> bool {
        (1..self.entries.len())
            .all(|i| self.entries[parent(i)].distance <= self.entries[i].distance)
    }

    /// Checks that the index map names exactly the live array slots
    pub fn check_index_map(&self) -> bool {
        self.positions.len() == self.entries.len()
            && self.positions.iter().all(|(&vertex, &index)| {
                self.entries
                    .get(index)
                    .is_some_and(|entry| entry.vertex == vertex)
            })
    }

    /// Swaps the root with the last entry, drops it, and sifts the new root down
    fn remove_root(&mut self) -> Option<HeapEntry> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let root = self.entries.pop()?;
        self.positions.remove(&root.vertex);
        if !self.entries.is_empty() {
            self.bubble_down(0);
        }
        Some(root)
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.entries[index].distance < self.entries[up].distance {
                self.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let left_distance = self.child_distance(left);
            let right_distance = self.child_distance(right);

            // Ties go to the left child
            let (child, child_distance) = if left_distance <= right_distance {
                (left, left_distance)
            } else {
                (right, right_distance)
            };

            if child_distance < self.entries[index].distance {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    fn child_distance(&self, index: usize) -> Distance {
        self.entries
            .get(index)
            .map_or(MISSING_CHILD, |entry| entry.distance)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].vertex, a);
        self.positions.insert(self.entries[b].vertex, b);
    }
}
