//! Hexmove - turn-based pathfinding and motion smoothing on hex grids
//!
//! Plan a shortest path across enabled hex cells, turn it into a smooth
//! boundary-respecting curve, trim it to the turn's movement budget, and
//! execute it tick by tick through a strict state machine.

pub mod core;
pub mod grid;
pub mod movement;
pub mod pathfinding;
pub mod smoothing;
