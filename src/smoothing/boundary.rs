//! Boundary extraction and ordering for navigable regions
//!
//! Finds the cells on the rim of a region and orders them into a closed
//! contour with a right-hand wall-following walk, so the curve smoother can
//! turn them into a clean outline.

use ahash::AHashSet;
use glam::Vec2;

use crate::grid::coord::{HexCoord, HexDirection, CLOCKWISE_DIRECTIONS};
use crate::grid::provider::CellProvider;

/// Cells of `region` with at least one neighbor outside it
pub fn boundary_cells(region: &[HexCoord]) -> Vec<HexCoord> {
    let set: AHashSet<HexCoord> = region.iter().copied().collect();
    let mut result: Vec<HexCoord> = region
        .iter()
        .copied()
        .filter(|coord| coord.neighbors().iter().any(|n| !set.contains(n)))
        .collect();
    result.sort();
    result
}

/// Order the region's boundary cells into a closed traversal
///
/// Wall-following walk: start at the topmost-then-leftmost boundary cell
/// (minimum world y, then minimum x); at each step scan the six directions
/// clockwise, starting two steps clockwise from the opposite of the arrival
/// direction, and take the first unvisited boundary neighbor. If the walk
/// stalls, jump to the nearest unvisited boundary cell by Euclidean
/// distance. The result visits every boundary cell exactly once.
pub fn trace_boundary_contour<P: CellProvider>(provider: &P, region: &[HexCoord]) -> Vec<HexCoord> {
    let boundary = boundary_cells(region);
    if boundary.is_empty() {
        return Vec::new();
    }

    let world = |coord: HexCoord| -> Vec2 {
        provider
            .cell_at_coord(coord)
            .map(|c| c.world_position)
            .unwrap_or(Vec2::ZERO)
    };

    let boundary_set: AHashSet<HexCoord> = boundary.iter().copied().collect();
    let Some(start) = boundary.iter().copied().min_by(|a, b| {
        let pa = world(*a);
        let pb = world(*b);
        pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
    }) else {
        return Vec::new();
    };

    let mut contour = Vec::with_capacity(boundary.len());
    let mut visited: AHashSet<HexCoord> = AHashSet::new();
    let mut current = start;
    let mut arrival = HexDirection::East;

    loop {
        contour.push(current);
        visited.insert(current);
        if visited.len() == boundary.len() {
            break;
        }

        let scan_start = (arrival.opposite().clockwise_index() + 2) % 6;
        let mut next: Option<(HexCoord, HexDirection)> = None;
        for k in 0..6 {
            let dir = CLOCKWISE_DIRECTIONS[(scan_start + k) % 6];
            let offset = dir.offset();
            let candidate = HexCoord::new(current.q + offset.q, current.r + offset.r);
            if boundary_set.contains(&candidate) && !visited.contains(&candidate) {
                next = Some((candidate, dir));
                break;
            }
        }

        match next {
            Some((cell, dir)) => {
                current = cell;
                arrival = dir;
            }
            None => {
                // Wall-following stalled; jump to the nearest unvisited cell
                let here = world(current);
                let nearest = boundary
                    .iter()
                    .copied()
                    .filter(|c| !visited.contains(c))
                    .min_by(|a, b| {
                        world(*a)
                            .distance_squared(here)
                            .total_cmp(&world(*b).distance_squared(here))
                    });
                match nearest {
                    Some(cell) => {
                        current = cell;
                        arrival = HexDirection::East;
                    }
                    None => break,
                }
            }
        }
    }

    contour
}

/// World positions of the ordered boundary contour
pub fn boundary_contour_points<P: CellProvider>(provider: &P, region: &[HexCoord]) -> Vec<Vec2> {
    trace_boundary_contour(provider, region)
        .iter()
        .filter_map(|c| provider.cell_at_coord(*c))
        .map(|cell| cell.world_position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid::HexGrid;
    use crate::grid::layout::HexLayout;

    fn island() -> (HexGrid, Vec<HexCoord>) {
        let center = HexCoord::new(0, 0);
        let mut coords = vec![center];
        coords.extend(center.neighbors());
        let grid = HexGrid::from_coords(coords.clone(), HexLayout::default());
        (grid, coords)
    }

    #[test]
    fn test_island_boundary_is_ring() {
        let (_, coords) = island();
        let boundary = boundary_cells(&coords);
        assert_eq!(boundary.len(), 6);
        assert!(!boundary.contains(&HexCoord::new(0, 0)));
    }

    #[test]
    fn test_island_contour_visits_each_once() {
        let (grid, coords) = island();
        let contour = trace_boundary_contour(&grid, &coords);
        assert_eq!(contour.len(), 6);

        let unique: AHashSet<HexCoord> = contour.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_island_contour_is_adjacent_walk() {
        let (grid, coords) = island();
        let contour = trace_boundary_contour(&grid, &coords);
        for pair in contour.windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 1);
        }
        // Ring closes back to the start
        assert_eq!(contour[0].distance(&contour[contour.len() - 1]), 1);
    }

    #[test]
    fn test_contour_starts_topmost_leftmost() {
        let (grid, coords) = island();
        let contour = trace_boundary_contour(&grid, &coords);
        // Both r=-1 ring cells are topmost; (0,-1) is the left one
        assert_eq!(contour[0], HexCoord::new(0, -1));
    }

    #[test]
    fn test_rectangle_boundary_excludes_interior() {
        let coords: Vec<HexCoord> = (0..5)
            .flat_map(|q| (0..5).map(move |r| HexCoord::new(q, r)))
            .collect();
        let boundary = boundary_cells(&coords);
        assert!(!boundary.contains(&HexCoord::new(2, 2)));
        assert!(boundary.contains(&HexCoord::new(0, 0)));
        assert!(boundary.contains(&HexCoord::new(4, 4)));
    }

    #[test]
    fn test_rectangle_contour_complete() {
        let coords: Vec<HexCoord> = (0..5)
            .flat_map(|q| (0..5).map(move |r| HexCoord::new(q, r)))
            .collect();
        let grid = HexGrid::from_coords(coords.clone(), HexLayout::default());

        let boundary = boundary_cells(&coords);
        let contour = trace_boundary_contour(&grid, &coords);
        assert_eq!(contour.len(), boundary.len());
    }

    #[test]
    fn test_empty_region() {
        let grid = HexGrid::from_coords([], HexLayout::default());
        assert!(trace_boundary_contour(&grid, &[]).is_empty());
    }

    #[test]
    fn test_single_cell_region() {
        let coords = vec![HexCoord::new(3, 3)];
        let grid = HexGrid::from_coords(coords.clone(), HexLayout::default());
        let contour = trace_boundary_contour(&grid, &coords);
        assert_eq!(contour, coords);
    }
}
