/// Vertex side of a graph whose vertices are the indices `0..vertex_count`.
///
/// Vertices carry no data of their own, a vertex exists exactly when its
/// index is below the vertex count fixed at construction.
pub trait Vertices {
    /// Iterator over all vertices in the graph.
    ///
    /// Vertices are yielded in ascending index order.
    type Vertices<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true when `vertex` is a valid index for this graph.
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
