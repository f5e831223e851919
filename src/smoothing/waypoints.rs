//! Waypoint generation from a discrete cell path
//!
//! Straight runs pass through untouched; turns get interior waypoints that
//! lean into the corner, plus midpoint subdivision to give the later
//! relaxation passes enough points to work with.

use glam::Vec2;

use crate::core::constants::{GEOM_EPSILON, STRAIGHT_PATH_COS_TOLERANCE};

/// True when every consecutive direction pair agrees within the straight-run
/// tolerance (~5 degrees)
pub fn is_straight_run(positions: &[Vec2]) -> bool {
    if positions.len() < 3 {
        return true;
    }

    let mut previous: Option<Vec2> = None;
    for pair in positions.windows(2) {
        let segment = pair[1] - pair[0];
        if segment.length() < GEOM_EPSILON {
            continue;
        }
        let direction = segment.normalize();
        if let Some(prev) = previous {
            if prev.dot(direction) < STRAIGHT_PATH_COS_TOLERANCE {
                return false;
            }
        }
        previous = Some(direction);
    }
    true
}

/// Turn cell-center positions into waypoints
///
/// On a straight run the waypoints are exactly the cell centers. Otherwise
/// interior waypoints are offset from the center along the bisector of the
/// incoming and outgoing directions, scaled by `tension` as a fraction of
/// the adjacent segment length. Endpoints are never moved.
pub fn generate_path_waypoints(positions: &[Vec2], tension: f32) -> Vec<Vec2> {
    if positions.len() < 3 || is_straight_run(positions) {
        return positions.to_vec();
    }

    let mut waypoints = Vec::with_capacity(positions.len());
    waypoints.push(positions[0]);

    for i in 1..positions.len() - 1 {
        let in_segment = positions[i] - positions[i - 1];
        let out_segment = positions[i + 1] - positions[i];

        if in_segment.length() < GEOM_EPSILON || out_segment.length() < GEOM_EPSILON {
            waypoints.push(positions[i]);
            continue;
        }

        let bisector = in_segment.normalize() + out_segment.normalize();
        if bisector.length() < GEOM_EPSILON {
            // Full reversal, no meaningful bisector
            waypoints.push(positions[i]);
            continue;
        }

        let scale = 0.5 * (in_segment.length() + out_segment.length()) * 0.5;
        waypoints.push(positions[i] + bisector.normalize() * tension * scale);
    }

    waypoints.push(positions[positions.len() - 1]);
    waypoints
}

/// Insert the midpoint of every consecutive pair, once per layer
///
/// Endpoints are preserved; each layer takes n+1 points to 2n+1.
pub fn midpoint_interpolation(points: &[Vec2], layers: u32) -> Vec<Vec2> {
    let mut current = points.to_vec();
    for _ in 0..layers {
        if current.len() < 2 {
            break;
        }
        let mut next = Vec::with_capacity(current.len() * 2 - 1);
        for pair in current.windows(2) {
            next.push(pair[0]);
            next.push((pair[0] + pair[1]) * 0.5);
        }
        next.push(current[current.len() - 1]);
        current = next;
    }
    current
}
