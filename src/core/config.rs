//! Movement configuration with documented tunables
//!
//! All recognized options are collected here with explanations of their
//! purpose and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::error::{HexMoveError, Result};
use crate::smoothing::CurveMethod;

/// Configuration for one agent's movement pipeline
///
/// Distances are in world units except where noted; the per-turn budget is
/// counted in hex-cell units (1 cell = 1 unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Maximum cumulative hex-cell distance an agent may travel in one turn
    pub max_movement_per_turn: f32,

    /// Speed along the smoothed curve during execution (world units/second)
    pub movement_speed: f32,

    /// Midpoint subdivision layers applied to the waypoint sequence (1-3)
    ///
    /// Each layer roughly doubles the point count, giving the string-pulling
    /// pass more points to work with. More than 3 layers adds cost without
    /// visible benefit.
    pub interpolation_layers: u32,

    /// Final smoothing pass: Chaikin subdivision or Catmull-Rom spline
    pub curve_method: CurveMethod,

    /// Iterations (Chaikin) or samples per segment (Catmull-Rom); 0 disables
    pub smoothing_iterations: u32,

    /// How far interior waypoints lean into a turn, as a fraction of the
    /// adjacent segment length
    pub waypoint_tension: f32,

    /// Distance from the curve endpoint at which execution snaps and completes
    pub arrival_distance_threshold: f32,

    /// Progress value past which execution snaps to the endpoint
    pub near_finish_progress_threshold: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_movement_per_turn: DEFAULT_MAX_MOVEMENT_PER_TURN,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            interpolation_layers: DEFAULT_INTERPOLATION_LAYERS,
            curve_method: CurveMethod::CatmullRom,
            smoothing_iterations: DEFAULT_SMOOTHING_ITERATIONS,
            waypoint_tension: DEFAULT_WAYPOINT_TENSION,
            arrival_distance_threshold: DEFAULT_ARRIVAL_DISTANCE_THRESHOLD,
            near_finish_progress_threshold: DEFAULT_NEAR_FINISH_PROGRESS,
        }
    }
}

impl MovementConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_movement_per_turn <= 0.0 {
            return Err(HexMoveError::InvalidConfig(format!(
                "max_movement_per_turn ({}) must be positive",
                self.max_movement_per_turn
            )));
        }

        if self.movement_speed <= 0.0 {
            return Err(HexMoveError::InvalidConfig(format!(
                "movement_speed ({}) must be positive",
                self.movement_speed
            )));
        }

        if !(1..=3).contains(&self.interpolation_layers) {
            return Err(HexMoveError::InvalidConfig(format!(
                "interpolation_layers ({}) must be between 1 and 3",
                self.interpolation_layers
            )));
        }

        if !(0.0..=1.0).contains(&self.waypoint_tension) {
            return Err(HexMoveError::InvalidConfig(format!(
                "waypoint_tension ({}) must be within [0, 1]",
                self.waypoint_tension
            )));
        }

        if self.arrival_distance_threshold < 0.0 {
            return Err(HexMoveError::InvalidConfig(format!(
                "arrival_distance_threshold ({}) must be non-negative",
                self.arrival_distance_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.near_finish_progress_threshold)
            || self.near_finish_progress_threshold == 0.0
        {
            return Err(HexMoveError::InvalidConfig(format!(
                "near_finish_progress_threshold ({}) must be within (0, 1]",
                self.near_finish_progress_threshold
            )));
        }

        Ok(())
    }
}
