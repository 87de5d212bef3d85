/// Errors raised while building graphs or generating weight matrices.
///
/// Traversals never fail: an out of range start vertex or a disconnected
/// graph yields a shorter (possibly empty) spanning tree instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The weight matrix is not square, some row has the wrong number of columns.
    #[error("weight matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A random graph configuration holds values the generator cannot sample from.
    #[error("invalid random graph configuration: {0}")]
    InvalidConfig(String),
}

impl GraphError {
    /// Returns true for errors caused by a malformed input matrix.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GraphError::NotSquare { .. })
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
