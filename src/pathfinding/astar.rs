//! A* shortest-path search over enabled hex cells
//!
//! Works against any `CellProvider`. Working sets (open set, closed set,
//! score maps) are allocated fresh per call and never shared between
//! searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::coord::HexCoord;
use crate::grid::provider::CellProvider;

/// Why a pathfinding call produced no path
///
/// All variants are non-fatal; callers treat them as "unreachable" and take
/// a fallback action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("start cell {0:?} is missing or disabled")]
    InvalidStart(HexCoord),

    #[error("goal cell {0:?} is missing or disabled")]
    InvalidGoal(HexCoord),

    #[error("world position ({0}, {1}) is not on the grid")]
    OffGrid(f32, f32),

    #[error("no path from {from:?} to {to:?}")]
    Unreachable { from: HexCoord, to: HexCoord },

    #[error("no enabled cell within {radius} of {goal:?}")]
    NoCellInRange { goal: HexCoord, radius: u32 },
}

/// An ordered cell path from start to destination, both inclusive
///
/// Consecutive cells are grid-adjacent and were enabled at search time.
/// Paths are immutable once returned; a new request produces a new path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexPath {
    cells: Vec<HexCoord>,
}

impl HexPath {
    pub fn new(cells: Vec<HexCoord>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[HexCoord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Path cost in hex-cell steps (cells minus one)
    pub fn cost(&self) -> u32 {
        self.cells.len().saturating_sub(1) as u32
    }

    pub fn start(&self) -> Option<HexCoord> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<HexCoord> {
        self.cells.last().copied()
    }

    /// Copy of this path limited to at most `max_steps` steps from the start
    pub fn truncated(&self, max_steps: u32) -> HexPath {
        let keep = (max_steps as usize + 1).min(self.cells.len());
        HexPath::new(self.cells[..keep].to_vec())
    }

    /// Resolve the cells to their world positions
    pub fn world_positions<P: CellProvider>(&self, provider: &P) -> Vec<Vec2> {
        self.cells
            .iter()
            .filter_map(|c| provider.cell_at_coord(*c))
            .map(|cell| cell.world_position)
            .collect()
    }
}

/// Node in the A* open set
#[derive(Debug, Clone, Copy)]
struct PathNode {
    coord: HexCoord,
    f_score: f32,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.coord == other.coord
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; equal f-scores break by lowest (q, r)
        // so repeated searches expand nodes in the same order.
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path between two cells with uniform step cost
pub fn find_path<P: CellProvider>(
    provider: &P,
    start: HexCoord,
    goal: HexCoord,
    move_cost: f32,
) -> Result<HexPath, PathError> {
    find_path_with_cost(provider, start, goal, |_, _| move_cost)
}

/// Find a shortest path with a per-step cost function
///
/// The cost function receives (from, to) for each candidate step; the hex
/// distance heuristic stays admissible as long as every step cost is >= 1.
pub fn find_path_with_cost<P, F>(
    provider: &P,
    start: HexCoord,
    goal: HexCoord,
    step_cost: F,
) -> Result<HexPath, PathError>
where
    P: CellProvider,
    F: Fn(HexCoord, HexCoord) -> f32,
{
    if !provider.is_enabled(start) {
        return Err(PathError::InvalidStart(start));
    }
    if !provider.is_enabled(goal) {
        return Err(PathError::InvalidGoal(goal));
    }
    if start == goal {
        return Ok(HexPath::new(vec![start]));
    }

    let mut open_set = BinaryHeap::new();
    let mut closed: AHashSet<HexCoord> = AHashSet::new();
    let mut came_from: AHashMap<HexCoord, HexCoord> = AHashMap::new();
    let mut g_scores: AHashMap<HexCoord, f32> = AHashMap::new();

    g_scores.insert(start, 0.0);
    open_set.push(PathNode {
        coord: start,
        f_score: start.distance(&goal) as f32,
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            let path = reconstruct_path(&came_from, current.coord);
            tracing::debug!(
                expanded = closed.len(),
                length = path.len(),
                "path found"
            );
            return Ok(path);
        }

        if !closed.insert(current.coord) {
            continue; // Already expanded via a cheaper entry
        }

        let current_g = *g_scores.get(&current.coord).unwrap_or(&f32::INFINITY);

        for neighbor in provider.enabled_neighbors(current.coord) {
            let coord = neighbor.coord;
            if closed.contains(&coord) {
                continue;
            }

            let tentative_g = current_g + step_cost(current.coord, coord);
            let neighbor_g = *g_scores.get(&coord).unwrap_or(&f32::INFINITY);

            if tentative_g < neighbor_g {
                came_from.insert(coord, current.coord);
                g_scores.insert(coord, tentative_g);
                open_set.push(PathNode {
                    coord,
                    f_score: tentative_g + coord.distance(&goal) as f32,
                });
            }
        }
    }

    Err(PathError::Unreachable {
        from: start,
        to: goal,
    })
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<HexCoord, HexCoord>, mut current: HexCoord) -> HexPath {
    let mut cells = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    HexPath::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid::HexGrid;
    use crate::grid::layout::HexLayout;

    fn grid(width: u32, height: u32) -> HexGrid {
        HexGrid::new(width, height, HexLayout::default())
    }

    #[test]
    fn test_straight_line_path() {
        let grid = grid(5, 5);
        let path = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(3, 0), 1.0).unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path.cost(), 3);
        assert_eq!(path.start(), Some(HexCoord::new(0, 0)));
        assert_eq!(path.goal(), Some(HexCoord::new(3, 0)));
    }

    #[test]
    fn test_path_cost_equals_hex_distance_when_open() {
        let grid = grid(8, 8);
        let start = HexCoord::new(0, 0);
        let goal = HexCoord::new(5, 2);
        let path = find_path(&grid, start, goal, 1.0).unwrap();
        assert_eq!(path.cost(), start.distance(&goal));
    }

    #[test]
    fn test_routes_around_obstacles() {
        let mut grid = grid(5, 5);
        grid.set_enabled(HexCoord::new(1, 0), false);
        grid.set_enabled(HexCoord::new(2, 0), false);

        let path = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(3, 0), 1.0).unwrap();

        assert!(!path.cells().contains(&HexCoord::new(1, 0)));
        assert!(!path.cells().contains(&HexCoord::new(2, 0)));
        assert!(path.cost() > 3);
        // Detour through the r=1 row costs one extra step
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn test_adjacency_invariant() {
        let mut grid = grid(6, 6);
        grid.set_enabled(HexCoord::new(2, 2), false);
        grid.set_enabled(HexCoord::new(3, 1), false);

        let path = find_path(&grid, HexCoord::new(0, 2), HexCoord::new(5, 2), 1.0).unwrap();
        for pair in path.cells().windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 1);
            assert!(grid.is_enabled(pair[0]));
            assert!(grid.is_enabled(pair[1]));
        }
    }

    #[test]
    fn test_invalid_start_and_goal() {
        let mut grid = grid(5, 5);
        grid.set_enabled(HexCoord::new(0, 0), false);

        let err = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(3, 0), 1.0).unwrap_err();
        assert_eq!(err, PathError::InvalidStart(HexCoord::new(0, 0)));

        let err = find_path(&grid, HexCoord::new(3, 0), HexCoord::new(0, 0), 1.0).unwrap_err();
        assert_eq!(err, PathError::InvalidGoal(HexCoord::new(0, 0)));

        let err = find_path(&grid, HexCoord::new(9, 9), HexCoord::new(3, 0), 1.0).unwrap_err();
        assert_eq!(err, PathError::InvalidStart(HexCoord::new(9, 9)));
    }

    #[test]
    fn test_unreachable_goal() {
        let mut grid = grid(7, 7);
        let goal = HexCoord::new(4, 4);
        for neighbor in goal.neighbors() {
            grid.set_enabled(neighbor, false);
        }

        let err = find_path(&grid, HexCoord::new(0, 0), goal, 1.0).unwrap_err();
        assert!(matches!(err, PathError::Unreachable { .. }));
    }

    #[test]
    fn test_same_start_and_goal() {
        let grid = grid(5, 5);
        let path = find_path(&grid, HexCoord::new(2, 2), HexCoord::new(2, 2), 1.0).unwrap();
        assert_eq!(path.cells(), &[HexCoord::new(2, 2)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let mut grid = grid(8, 8);
        grid.set_enabled(HexCoord::new(3, 3), false);
        grid.set_enabled(HexCoord::new(4, 2), false);

        let first = find_path(&grid, HexCoord::new(0, 3), HexCoord::new(7, 3), 1.0).unwrap();
        for _ in 0..5 {
            let again = find_path(&grid, HexCoord::new(0, 3), HexCoord::new(7, 3), 1.0).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_weighted_step_cost() {
        let grid = grid(5, 5);
        // Double cost doubles the total but not the cell count
        let cheap = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(3, 0), 1.0).unwrap();
        let costly =
            find_path_with_cost(&grid, HexCoord::new(0, 0), HexCoord::new(3, 0), |_, _| 2.0)
                .unwrap();
        assert_eq!(cheap.len(), costly.len());
    }

    #[test]
    fn test_truncated_path() {
        let grid = grid(8, 8);
        let path = find_path(&grid, HexCoord::new(0, 0), HexCoord::new(7, 0), 1.0).unwrap();
        assert_eq!(path.cost(), 7);

        let trimmed = path.truncated(5);
        assert_eq!(trimmed.cost(), 5);
        assert_eq!(trimmed.start(), path.start());
        assert_eq!(trimmed.cells()[..], path.cells()[..6]);

        // Truncating beyond the path length is a no-op
        assert_eq!(path.truncated(100), path);
    }
}
