//! A directed/undirected weighted graph over 3D vertices, rebuilt into a
//! CSR structure on every structural mutation and queried with a
//! label-correcting, data-parallel single-source shortest paths pass.

mod construct;
mod mesh;
mod mutate;
mod sssp;
mod types;
pub mod view;

pub use sssp::SsspResult;
pub use types::Graph3D;
pub use view::GraphView;
