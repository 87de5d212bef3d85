//! Weighted graphs built from weight matrices, and Prim's minimum spanning tree.
//!
//! A [`WeightedGraph`] is read from a square matrix where `matrix[row][col]`
//! is the weight of the edge from `row` to `col` and any negative cell means
//! "no edge". Edges keep their row-major order, which is also the order a
//! renderer gets from [`ReadEdges::edges`].
//!
//! [`prim_mst`] grows a spanning tree from one start vertex and returns the
//! selected edges in the order they were picked.
//!
//! ```
//! use primgraph::{prim_mst, WeightedGraph, NO_EDGE};
//!
//! let matrix = vec![
//!     vec![NO_EDGE, 2.0, 5.0],
//!     vec![2.0, NO_EDGE, 1.0],
//!     vec![5.0, 1.0, NO_EDGE],
//! ];
//! let graph = WeightedGraph::from_matrix(&matrix)?;
//!
//! let tree = prim_mst(&graph, 0);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree[1].to_string(), "(1,2) -> 1");
//! # Ok::<(), primgraph::GraphError>(())
//! ```

pub mod error;
pub mod graphs;

pub use error::{GraphError, Result};
pub use graphs::{
    directed::Directed,
    edge::Edge,
    edges::ReadEdges,
    frontier::{Frontier, FrontierKind, HeapFrontier, SortedFrontier},
    matrix::{WeightMatrix, NO_EDGE},
    prim::{prim_mst, prim_mst_with_config, total_weight, PrimConfig, PrimMst},
    random::{generate_random, generate_random_with_thread_rng, Pairing, RandomGraph},
    vertices::Vertices,
    visited::Visited,
    weighted::WeightedGraph,
};
