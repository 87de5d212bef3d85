use crate::graphs::edge::Edge;

/// A graph that supports read-only access to its weighted edges.
///
/// The edge list is a contiguous slice so callers such as renderers can
/// iterate it in storage order without going through an adapter.
/// The order is implementation defined but must be stable for a given
/// graph instance.
pub trait ReadEdges {
    /// Returns all edges in storage order.
    fn edges(&self) -> &[Edge];

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Sum of all edge weights.
    ///
    /// For a symmetric matrix every undirected connection is stored twice
    /// and contributes twice.
    fn total_edge_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }
}
