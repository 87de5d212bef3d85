use rand::Rng;
use tracing::trace;

use crate::error::{self, GraphError};
use crate::graphs::matrix::{WeightMatrix, NO_EDGE};

/// Which vertex pairs the generator considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Pairs `(i, j)` with `i < j` and `j + 1 < size`.
    ///
    /// The highest index never takes the `j` side, so the last vertex is
    /// always left without edges.
    #[default]
    Reference,
    /// Every pair `(i, j)` with `i < j < size`.
    AllPairs,
}

/// Generator of random symmetric weight matrices.
///
/// Each considered pair gets an edge with probability `edge_probability`,
/// its weight drawn uniformly from `[0, max_weight]` and written to both
/// `matrix[i][j]` and `matrix[j][i]`. All other cells hold [`NO_EDGE`].
#[derive(Debug, Clone, PartialEq)]
pub struct RandomGraph {
    pub edge_probability: f64,
    pub max_weight: f64,
    pub pairing: Pairing,
    /// Also consider the diagonal pairs `(i, i)`.
    pub self_loops: bool,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            edge_probability: 0.5,
            max_weight: 10.0,
            pairing: Pairing::Reference,
            self_loops: false,
        }
    }
}

impl RandomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_probability(mut self, edge_probability: f64) -> Self {
        self.edge_probability = edge_probability;
        self
    }

    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_pairing(mut self, pairing: Pairing) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Checks that the generator can sample with these settings.
    pub fn validate(&self) -> error::Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidConfig(format!(
                "edge probability {} is outside [0, 1]",
                self.edge_probability
            )));
        }
        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "max weight {} must be finite and non-negative",
                self.max_weight
            )));
        }
        Ok(())
    }

    /// Generates a `size` by `size` matrix.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> error::Result<WeightMatrix> {
        self.validate()?;
        Ok(self.fill(size, rng))
    }

    /// Exclusive upper bound of the `j` side of a pair.
    fn column_bound(&self, size: usize) -> usize {
        match self.pairing {
            Pairing::Reference => size.saturating_sub(1),
            Pairing::AllPairs => size,
        }
    }

    /// Assumes a validated configuration.
    fn fill<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> WeightMatrix {
        let mut matrix = vec![vec![NO_EDGE; size]; size];
        let bound = self.column_bound(size);

        for row in 0..size {
            let first = if self.self_loops { row } else { row + 1 };
            for col in first..bound {
                if !rng.random_bool(self.edge_probability) {
                    continue;
                }

                let weight = rng.random_range(0.0..=self.max_weight);
                matrix[row][col] = weight;
                matrix[col][row] = weight;
                trace!(row, col, weight, "generated edge");
            }
        }

        matrix
    }
}

/// Random symmetric weight matrix with the default [`RandomGraph`] settings.
///
/// A fair coin decides each pair, weights are uniform in `[0, 10]`.
pub fn generate_random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> WeightMatrix {
    RandomGraph::default().fill(size, rng)
}

/// [`generate_random`] driven by the thread local generator.
pub fn generate_random_with_thread_rng(size: usize) -> WeightMatrix {
    generate_random(size, &mut rand::rng())
}
