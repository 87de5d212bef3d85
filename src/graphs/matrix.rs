use crate::error::{GraphError, Result};

/// Square matrix of edge weights, `matrix[row][col]` is the weight of the
/// edge from `row` to `col`.
pub type WeightMatrix = Vec<Vec<f64>>;

/// Sentinel for "no edge".
///
/// Any negative cell means the same thing, this is the value the
/// generator writes.
pub const NO_EDGE: f64 = -1.0;

/// Returns true when a cell holds a real edge.
///
/// `NaN` is not an edge.
#[inline]
pub fn is_edge(weight: f64) -> bool {
    weight >= 0.0
}

/// Checks that every row has as many columns as there are rows.
///
/// An empty matrix is square.
pub fn ensure_square(matrix: &[Vec<f64>]) -> Result<()> {
    let expected = matrix.len();
    match matrix
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        Some((row, cells)) => Err(GraphError::NotSquare {
            row,
            expected,
            actual: cells.len(),
        }),
        None => Ok(()),
    }
}

/// Returns true when the matrix is square and `matrix[i][j] == matrix[j][i]`
/// for every pair, treating all negative cells as the same "no edge" value.
pub fn is_symmetric(matrix: &[Vec<f64>]) -> bool {
    if ensure_square(matrix).is_err() {
        return false;
    }

    let size = matrix.len();
    (0..size).all(|row| {
        (row + 1..size).all(|col| {
            let (a, b) = (matrix[row][col], matrix[col][row]);
            match (is_edge(a), is_edge(b)) {
                (true, true) => a == b,
                (false, false) => true,
                _ => false,
            }
        })
    })
}

/// Number of cells that hold a real edge.
pub fn count_edges(matrix: &[Vec<f64>]) -> usize {
    matrix
        .iter()
        .flat_map(|cells| cells.iter())
        .filter(|&&weight| is_edge(weight))
        .count()
}
