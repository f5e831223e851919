//! Hex-specific pathfinding conveniences
//!
//! World-position resolution, path-to-range search, and reachable-cell
//! enumeration for movement range display.

use ahash::AHashMap;
use glam::Vec2;

use crate::grid::coord::HexCoord;
use crate::grid::provider::CellProvider;
use crate::pathfinding::astar::{find_path, HexPath, PathError};

/// Find a path between two world positions
///
/// Fails with `OffGrid` when either position does not resolve to a cell.
pub fn find_path_world<P: CellProvider>(
    provider: &P,
    from: Vec2,
    to: Vec2,
    move_cost: f32,
) -> Result<HexPath, PathError> {
    let start = provider
        .cell_at_world_position(from)
        .ok_or(PathError::OffGrid(from.x, from.y))?
        .coord;
    let goal = provider
        .cell_at_world_position(to)
        .ok_or(PathError::OffGrid(to.x, to.y))?
        .coord;
    find_path(provider, start, goal, move_cost)
}

/// Find the shortest path to any enabled cell within `radius` of `goal`
///
/// Among candidates, the path with the fewest cells wins; ties go to the
/// first candidate in deterministic (distance-to-goal, then lexical) order.
pub fn find_path_to_range<P: CellProvider>(
    provider: &P,
    start: HexCoord,
    goal: HexCoord,
    radius: u32,
    move_cost: f32,
) -> Result<HexPath, PathError> {
    if start.distance(&goal) <= radius && provider.is_enabled(start) {
        return Ok(HexPath::new(vec![start]));
    }

    let mut candidates: Vec<HexCoord> = provider
        .enabled_cells_in_range(goal, radius)
        .iter()
        .map(|cell| cell.coord)
        .collect();
    candidates.sort_by_key(|c| (c.distance(&goal), *c));

    let mut best: Option<HexPath> = None;
    for candidate in candidates {
        if let Ok(path) = find_path(provider, start, candidate, move_cost) {
            let better = match &best {
                Some(current) => path.len() < current.len(),
                None => true,
            };
            if better {
                best = Some(path);
            }
        }
    }

    best.ok_or(PathError::NoCellInRange { goal, radius })
}

/// Enumerate every cell reachable from `start` within `budget` steps
///
/// Uniform-cost frontier expansion (Dijkstra-equivalent for unit edge cost).
/// Intended for range display and reachability queries, not for execution.
/// The result includes the start cell and is sorted lexically.
pub fn cells_in_movement_range<P: CellProvider>(
    provider: &P,
    start: HexCoord,
    budget: u32,
) -> Vec<HexCoord> {
    if !provider.is_enabled(start) {
        return Vec::new();
    }

    let mut distance: AHashMap<HexCoord, u32> = AHashMap::new();
    distance.insert(start, 0);
    let mut frontier = vec![start];

    for step in 1..=budget {
        let mut next = Vec::new();
        for coord in frontier {
            for neighbor in provider.enabled_neighbors(coord) {
                if !distance.contains_key(&neighbor.coord) {
                    distance.insert(neighbor.coord, step);
                    next.push(neighbor.coord);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    let mut cells: Vec<HexCoord> = distance.into_keys().collect();
    cells.sort();
    cells
}
