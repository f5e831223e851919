//! Shortest-path search over hex grids

pub mod astar;
pub mod queries;

pub use astar::{find_path, find_path_with_cost, HexPath, PathError};
pub use queries::{cells_in_movement_range, find_path_to_range, find_path_world};
