pub mod directed;
pub mod edge;
pub mod edges;
pub mod frontier;
pub mod matrix;
pub mod prim;
pub mod random;
pub mod vertices;
pub mod visited;
pub mod weighted;
