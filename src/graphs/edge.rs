use std::{cmp::Ordering, fmt};

/// A weighted edge between two vertex indices.
///
/// Edges are stored directed, from the row to the column of the weight
/// matrix they were read from. Equality is structural, selection order is
/// given by [`Edge::cmp_weight`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: f64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex.
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Destination vertex.
    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Both endpoints as a `(from, to)` pair.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    /// Endpoints with the smaller index first.
    ///
    /// Two directed edges describing the same undirected connection
    /// share the same unordered pair.
    #[inline]
    pub fn unordered_pair(&self) -> (usize, usize) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Compares two edges by weight only.
    ///
    /// This is a total order over `f64`, so sorting with it never panics.
    #[inline]
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) -> {}", self.from, self.to, self.weight)
    }
}
