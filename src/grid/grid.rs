//! Hex grid: owns cell data and implements the provider interface

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::grid::cell::HexCell;
use crate::grid::coord::HexCoord;
use crate::grid::layout::HexLayout;
use crate::grid::provider::CellProvider;

/// The full hex grid
///
/// Cells are keyed by coordinate; world positions are cached at creation
/// from the layout. The grid owns cell data; pathfinding and smoothing only
/// read it through `CellProvider`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexGrid {
    pub layout: HexLayout,
    cells: HashMap<HexCoord, HexCell>,
}

impl HexGrid {
    /// Create a rectangular grid with all cells enabled
    pub fn new(width: u32, height: u32, layout: HexLayout) -> Self {
        let mut cells = HashMap::new();
        for q in 0..width as i32 {
            for r in 0..height as i32 {
                let coord = HexCoord::new(q, r);
                cells.insert(coord, HexCell::new(coord, &layout));
            }
        }
        Self { layout, cells }
    }

    /// Create a grid from an arbitrary set of coordinates (all enabled)
    pub fn from_coords(coords: impl IntoIterator<Item = HexCoord>, layout: HexLayout) -> Self {
        let cells = coords
            .into_iter()
            .map(|coord| (coord, HexCell::new(coord, &layout)))
            .collect();
        Self { layout, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_mut(&mut self, coord: HexCoord) -> Option<&mut HexCell> {
        self.cells.get_mut(&coord)
    }

    /// Toggle a cell's enabled flag; returns false if the cell is absent
    pub fn set_enabled(&mut self, coord: HexCoord, enabled: bool) -> bool {
        match self.cells.get_mut(&coord) {
            Some(cell) => {
                cell.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Coordinates of every enabled cell
    pub fn enabled_coords(&self) -> Vec<HexCoord> {
        let mut coords: Vec<HexCoord> = self
            .cells
            .values()
            .filter(|c| c.enabled)
            .map(|c| c.coord)
            .collect();
        coords.sort();
        coords
    }

    pub fn cells(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.values()
    }
}

impl CellProvider for HexGrid {
    fn cell_at_coord(&self, coord: HexCoord) -> Option<&HexCell> {
        self.cells.get(&coord)
    }

    fn cell_at_world_position(&self, position: Vec2) -> Option<&HexCell> {
        let coord = self.layout.world_to_hex(position);
        self.cells.get(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = HexGrid::new(5, 5, HexLayout::default());
        assert_eq!(grid.len(), 25);
        assert!(grid.cell_at_coord(HexCoord::new(4, 4)).is_some());
        assert!(grid.cell_at_coord(HexCoord::new(5, 0)).is_none());
    }

    #[test]
    fn test_set_enabled() {
        let mut grid = HexGrid::new(5, 5, HexLayout::default());
        assert!(grid.set_enabled(HexCoord::new(2, 2), false));
        assert!(!grid.is_enabled(HexCoord::new(2, 2)));
        assert!(!grid.set_enabled(HexCoord::new(50, 50), false));
    }

    #[test]
    fn test_enabled_neighbors_excludes_disabled() {
        let mut grid = HexGrid::new(5, 5, HexLayout::default());
        grid.set_enabled(HexCoord::new(1, 2), false);

        let neighbors = grid.enabled_neighbors(HexCoord::new(2, 2));
        assert!(neighbors.iter().all(|c| c.coord != HexCoord::new(1, 2)));
    }

    #[test]
    fn test_cell_at_world_position() {
        let grid = HexGrid::new(5, 5, HexLayout::default());
        let center = grid.layout.hex_to_world(HexCoord::new(3, 1));
        let cell = grid.cell_at_world_position(center).unwrap();
        assert_eq!(cell.coord, HexCoord::new(3, 1));

        // Far off the grid
        assert!(grid.cell_at_world_position(Vec2::new(1e5, 1e5)).is_none());
    }

    #[test]
    fn test_from_coords_island() {
        let center = HexCoord::new(0, 0);
        let mut coords = vec![center];
        coords.extend(center.neighbors());
        let grid = HexGrid::from_coords(coords, HexLayout::default());
        assert_eq!(grid.len(), 7);
        assert_eq!(grid.enabled_neighbors(center).len(), 6);
    }

    #[test]
    fn test_enabled_cells_in_range() {
        let mut grid = HexGrid::new(7, 7, HexLayout::default());
        grid.set_enabled(HexCoord::new(3, 2), false);
        let in_range = grid.enabled_cells_in_range(HexCoord::new(3, 3), 1);
        // 7 cells in range 1, one disabled
        assert_eq!(in_range.len(), 6);
    }
}
