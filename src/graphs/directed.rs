use crate::graphs::{edge::Edge, edges::ReadEdges, vertices::Vertices};

/// Core abstraction for finite directed weighted graphs.
///
/// Each stored edge points from a source vertex to a destination vertex.
/// Outgoing edges of a vertex form its bucket in the adjacency index.
/// Vertices without outgoing edges have no bucket at all, which is
/// observable through [`Directed::outgoing`] returning `None` and through
/// [`Directed::sources`] skipping them.
///
/// Algorithms such as spanning tree construction are written as generic
/// helpers on top of this interface.
pub trait Directed: Vertices + ReadEdges {
    /// Iterator over the vertices that own a bucket in the adjacency index.
    type Sources<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the outgoing edges of `source` in storage order.
    ///
    /// Returns `None` when the vertex has no outgoing edges or is out of range.
    fn outgoing(&self, source: usize) -> Option<&[Edge]>;

    /// Returns the vertices with at least one outgoing edge, ascending.
    fn sources(&self) -> Self::Sources<'_>;

    /// Returns the number of edges with the given source vertex.
    fn outgoing_degree(&self, vertex: usize) -> usize {
        self.outgoing(vertex).map_or(0, <[Edge]>::len)
    }

    /// Returns the number of edges with the given destination vertex.
    ///
    /// This scans the whole edge list.
    fn ingoing_degree(&self, vertex: usize) -> usize {
        self.edges().iter().filter(|edge| edge.to() == vertex).count()
    }

    /// Returns the number of edges with the same source and destination vertex.
    fn loop_degree(&self, vertex: usize) -> usize {
        self.outgoing(vertex)
            .map_or(0, |bucket| bucket.iter().filter(|edge| edge.is_loop()).count())
    }

    /// Returns true when at least one edge goes from `from` to `to`.
    ///
    /// This checks for a single step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_connected(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Weight of the first edge from `from` to `to`, if any.
    fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.outgoing(from)?
            .iter()
            .find(|edge| edge.to() == to)
            .map(Edge::weight)
    }
}
