//! Hex grid model: coordinates, layout, cells, and the provider interface

pub mod cell;
pub mod coord;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod layout;
pub mod provider;

pub use cell::HexCell;
pub use coord::{HexCoord, HexDirection, CLOCKWISE_DIRECTIONS};
pub use grid::HexGrid;
pub use layout::{HexLayout, Projection};
pub use provider::CellProvider;
