use std::collections::BTreeMap;

use dijkstra_heap::data_structures::IndexedMinHeap;
use dijkstra_heap::{Error, UNREACHED};
use rand::prelude::*;
use rand::rngs::StdRng;

fn assert_invariants(heap: &IndexedMinHeap) {
    assert!(heap.check_heap_order(), "parent larger than child: {:?}", heap);
    assert!(heap.check_index_map(), "index map out of sync: {:?}", heap);
}

#[test]
fn test_insert_and_extract_in_order() {
    let mut heap = IndexedMinHeap::new();
    for (vertex, distance) in [(1, 40), (2, 10), (3, 30), (4, 20), (5, 50)] {
        heap.insert(vertex, distance).unwrap();
        assert_invariants(&heap);
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some((2, 10)));

    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min().unwrap());
        assert_invariants(&heap);
    }
    assert_eq!(extracted, vec![(2, 10), (4, 20), (3, 30), (1, 40), (5, 50)]);
}

#[test]
fn test_contains_and_distance_follow_entries() {
    let mut heap = IndexedMinHeap::new();
    assert!(heap.is_empty());
    assert!(!heap.contains(7));

    heap.insert(7, 3).unwrap();
    heap.insert(9, 1).unwrap();
    assert!(heap.contains(7));
    assert_eq!(heap.distance(7), Some(3));

    assert_eq!(heap.extract_min().unwrap(), (9, 1));
    assert!(!heap.contains(9));
    assert_eq!(heap.distance(9), None);
    assert!(heap.contains(7));
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut heap = IndexedMinHeap::new();
    heap.insert(1, 5).unwrap();
    assert!(matches!(heap.insert(1, 2), Err(Error::DuplicateEntry(1))));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.distance(1), Some(5));
}

#[test]
fn test_negative_insert_rejected() {
    let mut heap = IndexedMinHeap::new();
    assert!(matches!(
        heap.insert(1, -1),
        Err(Error::NegativeDistance { vertex: 1, distance: -1 })
    ));
    assert!(heap.is_empty());
}

#[test]
fn test_extract_from_empty_heap_fails() {
    let mut heap = IndexedMinHeap::new();
    assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));

    heap.insert(3, 0).unwrap();
    heap.extract_min().unwrap();
    assert!(matches!(heap.extract_min(), Err(Error::EmptyHeap)));
}

#[test]
fn test_decrease_moves_entry_to_front() {
    let mut heap = IndexedMinHeap::new();
    for vertex in 0..10 {
        heap.insert(vertex, 100 + vertex as i64).unwrap();
    }

    heap.decrease(9, 5).unwrap();
    assert_invariants(&heap);
    assert_eq!(heap.len(), 10);
    assert_eq!(heap.distance(9), Some(5));
    assert_eq!(heap.peek(), Some((9, 5)));

    heap.decrease(4, 50).unwrap();
    assert_invariants(&heap);
    assert_eq!(heap.extract_min().unwrap(), (9, 5));
    assert_eq!(heap.extract_min().unwrap(), (4, 50));
    assert_eq!(heap.extract_min().unwrap(), (0, 100));
}

#[test]
fn test_decrease_of_root_and_last_entry() {
    let mut heap = IndexedMinHeap::new();
    heap.insert(1, 10).unwrap();
    heap.insert(2, 20).unwrap();
    heap.insert(3, 30).unwrap();

    heap.decrease(1, 0).unwrap();
    assert_invariants(&heap);
    assert_eq!(heap.peek(), Some((1, 0)));

    heap.decrease(3, 25).unwrap();
    assert_invariants(&heap);
    assert_eq!(heap.distance(3), Some(25));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_decrease_from_sentinel() {
    let mut heap = IndexedMinHeap::new();
    heap.insert(0, 0).unwrap();
    heap.insert(1, UNREACHED).unwrap();
    heap.insert(2, UNREACHED).unwrap();

    heap.decrease(2, 7).unwrap();
    assert_invariants(&heap);
    assert_eq!(heap.extract_min().unwrap(), (0, 0));
    assert_eq!(heap.extract_min().unwrap(), (2, 7));
    assert_eq!(heap.extract_min().unwrap(), (1, UNREACHED));
}

#[test]
fn test_decrease_rejects_non_smaller_values() {
    let mut heap = IndexedMinHeap::new();
    heap.insert(1, 10).unwrap();
    heap.insert(2, 20).unwrap();

    assert!(matches!(
        heap.decrease(1, 10),
        Err(Error::NotSmaller { vertex: 1, current: 10, requested: 10 })
    ));
    assert!(matches!(
        heap.decrease(1, 11),
        Err(Error::NotSmaller { vertex: 1, current: 10, requested: 11 })
    ));
    assert!(matches!(heap.decrease(2, -3), Err(Error::NegativeDistance { .. })));
    assert!(matches!(heap.decrease(5, 1), Err(Error::MissingEntry(5))));

    // Failed calls leave the heap untouched
    assert_invariants(&heap);
    assert_eq!(heap.distance(1), Some(10));
    assert_eq!(heap.distance(2), Some(20));
}

#[test]
fn test_clear() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    heap.insert(1, 1).unwrap();
    heap.insert(2, 2).unwrap();
    heap.clear();
    assert!(heap.is_empty());
    assert!(!heap.contains(1));
    assert_invariants(&heap);
}

// Random mix of insert / decrease / extract_min checked against a plain map
#[test]
fn test_random_operations_match_reference() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..20 {
        let mut heap = IndexedMinHeap::new();
        let mut reference: BTreeMap<usize, i64> = BTreeMap::new();
        let mut next_vertex = 0;

        for _ in 0..500 {
            match rng.gen_range(0..10) {
                0..=3 => {
                    let distance = rng.gen_range(0..1_000);
                    heap.insert(next_vertex, distance).unwrap();
                    reference.insert(next_vertex, distance);
                    next_vertex += 1;
                }
                4..=6 if !reference.is_empty() => {
                    let keys: Vec<usize> = reference.keys().copied().collect();
                    let vertex = *keys.choose(&mut rng).unwrap();
                    let current = reference[&vertex];
                    if current > 0 {
                        let lowered = rng.gen_range(0..current);
                        heap.decrease(vertex, lowered).unwrap();
                        reference.insert(vertex, lowered);
                    } else {
                        assert!(heap.decrease(vertex, 0).is_err());
                    }
                }
                _ => {
                    let expected_min = reference.values().min().copied();
                    match heap.extract_min() {
                        Ok((vertex, distance)) => {
                            assert_eq!(Some(distance), expected_min);
                            assert_eq!(reference.remove(&vertex), Some(distance));
                        }
                        Err(err) => {
                            assert!(matches!(err, Error::EmptyHeap));
                            assert!(reference.is_empty());
                        }
                    }
                }
            }

            assert_invariants(&heap);
            assert_eq!(heap.len(), reference.len());
            for (&vertex, &distance) in &reference {
                assert_eq!(heap.distance(vertex), Some(distance));
            }
        }
    }
}

#[test]
fn test_drain_matches_sorted_reference() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut heap = IndexedMinHeap::new();
    let mut expected = Vec::new();

    for vertex in 0..1_000 {
        let distance = rng.gen_range(0..50);
        heap.insert(vertex, distance).unwrap();
        expected.push(distance);
    }
    expected.sort_unstable();

    let mut drained = Vec::new();
    while let Ok((_, distance)) = heap.extract_min() {
        drained.push(distance);
    }
    assert_eq!(drained, expected);
}
