use std::ops::Range;

use tracing::debug;

use crate::error::{self, GraphError};
use crate::graphs::{
    directed::Directed,
    edge::Edge,
    edges::ReadEdges,
    matrix::{ensure_square, is_edge},
    vertices::Vertices,
};

/// Weighted directed graph built from a square weight matrix.
///
/// Vertices are numbered from zero up to `vertex_count - 1`, where
/// `vertex_count` is the dimension of the source matrix.
/// Edges are kept in row-major scan order, so the outgoing edges of a
/// vertex `u` already form a contiguous segment of the edge list.
/// The segment for `u` is the half open range
/// `offsets[u]` up to `offsets[u + 1]`, and acts as the bucket of `u` in
/// the adjacency index. A vertex whose segment is empty has no bucket.
///
/// The length of `offsets` is `vertex_count + 1`.
/// `offsets[0]` is always zero.
/// `offsets[vertex_count]` is always equal to `edges.len`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    /// Row offsets into `edges`.
    offsets: Box<[usize]>,

    /// All edges in row-major order.
    edges: Box<[Edge]>,
}

impl Default for WeightedGraph {
    /// Empty graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            offsets: Box::from([0]),
            edges: Box::new([]),
        }
    }
}

impl WeightedGraph {
    /// Builds a graph from a square weight matrix.
    ///
    /// Every cell holding a non-negative weight becomes an edge from its
    /// row to its column. Negative cells, and `NaN`, mean "no edge".
    /// Self loops on the diagonal and asymmetric weights are kept as is.
    ///
    /// Returns [`GraphError::NotSquare`] when some row does not have as many
    /// columns as the matrix has rows. An empty matrix gives an empty graph.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> error::Result<Self> {
        ensure_square(matrix)?;

        let vertex_count = matrix.len();
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut edges = Vec::new();

        offsets.push(0);
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &weight) in cells.iter().enumerate() {
                if is_edge(weight) {
                    edges.push(Edge::new(row, col, weight));
                }
            }
            offsets.push(edges.len());
        }

        let graph = Self {
            offsets: offsets.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
        };

        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            loops = graph.edges.iter().filter(|edge| edge.is_loop()).count(),
            "built weighted graph from matrix"
        );

        Ok(graph)
    }

    /// Returns the half open range of the bucket of a vertex in the edge list.
    ///
    /// Returns None when vertex is out of range.
    /// The range is empty for vertices without outgoing edges.
    #[inline]
    pub fn neighbor_range(&self, vertex: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(vertex)?;
        let end = *self.offsets.get(vertex + 1)?;
        Some((start, end))
    }

    /// Returns true when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

impl TryFrom<&[Vec<f64>]> for WeightedGraph {
    type Error = GraphError;

    fn try_from(matrix: &[Vec<f64>]) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

impl TryFrom<Vec<Vec<f64>>> for WeightedGraph {
    type Error = GraphError;

    fn try_from(matrix: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_matrix(&matrix)
    }
}

impl Vertices for WeightedGraph {
    type Vertices<'a>
        = Range<usize>
    where
        Self: 'a;

    /// Vertices are the integers from zero up to `vertex_count`.
    fn vertices(&self) -> Self::Vertices<'_> {
        0..self.vertex_count()
    }

    fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }
}

impl ReadEdges for WeightedGraph {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl Directed for WeightedGraph {
    type Sources<'a>
        = SourceVertices<'a>
    where
        Self: 'a;

    fn outgoing(&self, source: usize) -> Option<&[Edge]> {
        let (start, end) = self.neighbor_range(source)?;
        if start == end {
            return None;
        }
        Some(&self.edges[start..end])
    }

    fn sources(&self) -> Self::Sources<'_> {
        SourceVertices {
            graph: self,
            vertex: 0,
        }
    }

    fn outgoing_degree(&self, vertex: usize) -> usize {
        match self.neighbor_range(vertex) {
            Some((start, end)) => end - start,
            None => 0,
        }
    }
}

/// Iterator over the vertices of a [`WeightedGraph`] that have a bucket.
///
/// Walks the offsets and skips vertices whose segment is empty.
pub struct SourceVertices<'a> {
    graph: &'a WeightedGraph,
    /// Next vertex to inspect.
    vertex: usize,
}

impl Iterator for SourceVertices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((start, end)) = self.graph.neighbor_range(self.vertex) {
            let vertex = self.vertex;
            self.vertex += 1;

            if start < end {
                return Some(vertex);
            }
        }

        None
    }
}
