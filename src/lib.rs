//! Two data-parallel geometry cores for a 3D perception stack: a weighted
//! graph over 3D vertices with parallel single-source shortest paths, and a
//! dense probabilistic occupancy grid integrating ranged point clouds via
//! log-odds updates.

pub mod error;
pub mod graph;
pub mod occupancy;
mod vec3;

pub use error::GraphError;
pub use graph::{Graph3D, GraphView, SsspResult};
pub use occupancy::{OccupancyGrid, OccupancyVoxel};
pub use vec3::Vec3;
