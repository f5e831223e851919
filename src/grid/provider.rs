//! Capability interface between the grid and the pathfinding core
//!
//! The core never reaches for ambient grid state; it receives a
//! `CellProvider` reference per call. `HexGrid` is the in-crate
//! implementation, but collaborators may supply their own.

use glam::Vec2;

use crate::grid::cell::HexCell;
use crate::grid::coord::HexCoord;

/// Read access to cell existence, enabled state, and world positions
pub trait CellProvider {
    /// Cell at the given coordinate, if it exists
    fn cell_at_coord(&self, coord: HexCoord) -> Option<&HexCell>;

    /// Cell containing the given world position, if on the grid
    fn cell_at_world_position(&self, position: Vec2) -> Option<&HexCell>;

    /// All enabled cells adjacent to the given coordinate
    fn enabled_neighbors(&self, coord: HexCoord) -> Vec<&HexCell> {
        coord
            .neighbors()
            .iter()
            .filter_map(|c| self.cell_at_coord(*c))
            .filter(|cell| cell.enabled)
            .collect()
    }

    /// All enabled cells within `radius` hex-distance of `center` (inclusive)
    fn enabled_cells_in_range(&self, center: HexCoord, radius: u32) -> Vec<&HexCell> {
        center
            .hexes_in_range(radius)
            .iter()
            .filter_map(|c| self.cell_at_coord(*c))
            .filter(|cell| cell.enabled)
            .collect()
    }

    /// True when the coordinate resolves to an enabled cell
    fn is_enabled(&self, coord: HexCoord) -> bool {
        self.cell_at_coord(coord).map_or(false, |c| c.enabled)
    }
}
