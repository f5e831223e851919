//! Path-to-curve pipeline
//!
//! A discrete cell path becomes a smooth curve in four stages: waypoint
//! generation, midpoint subdivision, string pulling against the hex
//! corridor, and a final spline pass.

pub mod boundary;
pub mod curve;
pub mod string_pull;
pub mod waypoints;

pub use boundary::{boundary_cells, boundary_contour_points, trace_boundary_contour};
pub use curve::{catmull_rom, chaikin, smooth, CurveMethod, SmoothCurve};
pub use string_pull::{point_in_hexagon, pull_string_through_path};
pub use waypoints::{generate_path_waypoints, is_straight_run, midpoint_interpolation};

use crate::core::config::MovementConfig;
use crate::grid::layout::HexLayout;
use crate::grid::provider::CellProvider;
use crate::pathfinding::astar::HexPath;

/// Run the full pipeline for a movement path
///
/// The curve starts and ends exactly at the first and last cell centers and
/// never leaves the union of the path cells' hexagons before the final
/// spline pass.
pub fn generate_movement_curve<P: CellProvider>(
    provider: &P,
    layout: &HexLayout,
    path: &HexPath,
    config: &MovementConfig,
) -> SmoothCurve {
    let positions = path.world_positions(provider);
    if positions.len() < 2 {
        return SmoothCurve::open(positions);
    }

    let waypoints = generate_path_waypoints(&positions, config.waypoint_tension);
    let interpolated = midpoint_interpolation(&waypoints, config.interpolation_layers);

    let polygons: Vec<[glam::Vec2; 6]> = path
        .cells()
        .iter()
        .map(|c| layout.polygon_corners(*c))
        .collect();
    let pulled = pull_string_through_path(&interpolated, &polygons);

    smooth(&pulled, config.curve_method, config.smoothing_iterations, false)
}

/// Trace and smooth the closed outline of a navigable region
pub fn generate_boundary_curve<P: CellProvider>(
    provider: &P,
    region: &[crate::grid::coord::HexCoord],
    method: CurveMethod,
    amount: u32,
) -> SmoothCurve {
    let points = boundary_contour_points(provider, region);
    smooth(&points, method, amount, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::coord::HexCoord;
    use crate::grid::grid::HexGrid;
    use crate::pathfinding::astar::find_path;

    fn grid() -> HexGrid {
        HexGrid::new(8, 8, HexLayout::default())
    }

    #[test]
    fn test_curve_preserves_path_endpoints() {
        let grid = grid();
        let path = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(4, 3), 1.0).unwrap();
        let config = MovementConfig::default();

        let curve = generate_movement_curve(&grid, &grid.layout, &path, &config);

        let start = grid.layout.hex_to_world(HexCoord::new(0, 0));
        let goal = grid.layout.hex_to_world(HexCoord::new(4, 3));
        assert!((curve.first().unwrap() - start).length() < 0.001);
        assert!((curve.last().unwrap() - goal).length() < 0.001);
    }

    #[test]
    fn test_curve_endpoints_for_both_methods() {
        let grid = grid();
        let path = find_path(&grid, HexCoord::new(0, 2), HexCoord::new(5, 1), 1.0).unwrap();

        for method in [CurveMethod::Chaikin, CurveMethod::CatmullRom] {
            let config = MovementConfig {
                curve_method: method,
                ..Default::default()
            };
            let curve = generate_movement_curve(&grid, &grid.layout, &path, &config);
            let start = grid.layout.hex_to_world(HexCoord::new(0, 2));
            let goal = grid.layout.hex_to_world(HexCoord::new(5, 1));
            assert!((curve.first().unwrap() - start).length() < 0.001);
            assert!((curve.last().unwrap() - goal).length() < 0.001);
        }
    }

    #[test]
    fn test_single_cell_path_degenerate_curve() {
        let grid = grid();
        let path = find_path(&grid, HexCoord::new(2, 2), HexCoord::new(2, 2), 1.0).unwrap();
        let curve =
            generate_movement_curve(&grid, &grid.layout, &path, &MovementConfig::default());
        assert_eq!(curve.len(), 1);
        assert!(!curve.closed);
    }

    #[test]
    fn test_curve_length_at_least_straight_distance() {
        let grid = grid();
        let path = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(5, 0), 1.0).unwrap();
        let curve =
            generate_movement_curve(&grid, &grid.layout, &path, &MovementConfig::default());

        let straight = (curve.last().unwrap() - curve.first().unwrap()).length();
        assert!(curve.total_length() >= straight - 0.001);
    }

    #[test]
    fn test_island_boundary_curve_closed() {
        let center = HexCoord::new(0, 0);
        let mut coords = vec![center];
        coords.extend(center.neighbors());
        let grid = HexGrid::from_coords(coords.clone(), HexLayout::default());

        let curve = generate_boundary_curve(&grid, &coords, CurveMethod::Chaikin, 2);
        assert!(curve.closed);
        assert_eq!(curve.first(), curve.last());
        assert!(curve.len() > 6);
    }
}
