use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use crate::graphs::edge::Edge;

/// Pool of candidate edges, handed out lightest first.
///
/// Among edges of equal weight the one pushed first is popped first,
/// so every implementation yields the same sequence for the same pushes.
pub trait Frontier: Default {
    /// Adds a batch of edges, in order.
    fn push_batch(&mut self, edges: &[Edge]);

    /// Removes and returns the lightest edge.
    fn pop_min(&mut self) -> Option<Edge>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects which [`Frontier`] implementation a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// Binary min-heap, `O(log n)` per push and pop.
    #[default]
    Heap,
    /// Sorted list re-sorted after every batch.
    Sorted,
}

/// Heap entry ordered by weight, then by insertion sequence.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    sequence: u64,
    edge: Edge,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .cmp_weight(&other.edge)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Frontier backed by a binary min-heap.
///
/// Each pushed edge is tagged with a running sequence number which breaks
/// weight ties in insertion order.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_sequence: u64,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn push_batch(&mut self, edges: &[Edge]) {
        self.heap.reserve(edges.len());
        for &edge in edges {
            let sequence = self.next_sequence;
            self.next_sequence += 1;
            self.heap.push(Reverse(Candidate { sequence, edge }));
        }
    }

    fn pop_min(&mut self) -> Option<Edge> {
        self.heap.pop().map(|Reverse(candidate)| candidate.edge)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Frontier kept as a fully sorted list.
///
/// Every batch is appended and the whole list is stable sorted by weight,
/// so earlier entries stay ahead of later ones with the same weight.
/// Costs `O(n log n)` per batch, useful as a reference for [`HeapFrontier`].
#[derive(Debug, Default)]
pub struct SortedFrontier {
    sorted: VecDeque<Edge>,
}

impl SortedFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending edges, lightest first.
    pub fn as_slices(&self) -> (&[Edge], &[Edge]) {
        self.sorted.as_slices()
    }
}

impl Frontier for SortedFrontier {
    fn push_batch(&mut self, edges: &[Edge]) {
        self.sorted.extend(edges.iter().copied());
        self.sorted.make_contiguous().sort_by(Edge::cmp_weight);
    }

    fn pop_min(&mut self) -> Option<Edge> {
        self.sorted.pop_front()
    }

    fn len(&self) -> usize {
        self.sorted.len()
    }
}
