//! String pulling: tighten a waypoint polyline inside its hex corridor
//!
//! Interior points relax toward the straight line between their neighbors,
//! but a move is only accepted while the point stays inside the union of the
//! path cells' hexagon polygons. Corners tighten; the curve never leaves the
//! corridor.

use glam::Vec2;

use crate::core::constants::{
    GEOM_EPSILON, STRING_PULL_CONVERGENCE_THRESHOLD, STRING_PULL_MAX_ITERATIONS,
    STRING_PULL_RETRY_FRACTIONS,
};

/// Point-in-convex-polygon test with a small boundary tolerance
///
/// Accepts points on shared edges between adjacent hexagons, which ray
/// casting would reject on both sides.
pub fn point_in_hexagon(point: Vec2, corners: &[Vec2; 6]) -> bool {
    let mut sign = 0.0_f32;
    for i in 0..6 {
        let a = corners[i];
        let b = corners[(i + 1) % 6];
        let cross = (b - a).perp_dot(point - a);
        if cross.abs() <= GEOM_EPSILON {
            continue; // On the edge line
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// True when the point lies inside any of the given hexagons
pub fn point_in_any_hexagon(point: Vec2, polygons: &[[Vec2; 6]]) -> bool {
    polygons.iter().any(|p| point_in_hexagon(point, p))
}

/// Perpendicular projection of `point` onto segment (a, b), clamped to it
///
/// Returns `a` for degenerate (near-zero-length) segments rather than
/// dividing by zero.
pub fn project_onto_segment(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < GEOM_EPSILON * GEOM_EPSILON {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Relax interior points toward straight lines while staying inside the
/// corridor formed by `polygons`
///
/// Runs at most `STRING_PULL_MAX_ITERATIONS` passes and stops early once the
/// largest single-point movement drops below the convergence threshold. A
/// rejected move is retried at decreasing fractions before the point is left
/// in place. Endpoints never move.
pub fn pull_string_through_path(points: &[Vec2], polygons: &[[Vec2; 6]]) -> Vec<Vec2> {
    let mut result = points.to_vec();
    if result.len() < 3 || polygons.is_empty() {
        return result;
    }

    for _ in 0..STRING_PULL_MAX_ITERATIONS {
        let mut largest_move = 0.0_f32;

        for i in 1..result.len() - 1 {
            let target = project_onto_segment(result[i], result[i - 1], result[i + 1]);
            let full_move = target - result[i];
            if full_move.length() < GEOM_EPSILON {
                continue;
            }

            let mut accepted: Option<Vec2> = None;
            if point_in_any_hexagon(target, polygons) {
                accepted = Some(target);
            } else {
                for fraction in STRING_PULL_RETRY_FRACTIONS {
                    let candidate = result[i] + full_move * fraction;
                    if point_in_any_hexagon(candidate, polygons) {
                        accepted = Some(candidate);
                        break;
                    }
                }
            }

            if let Some(new_point) = accepted {
                let moved = (new_point - result[i]).length();
                if moved > largest_move {
                    largest_move = moved;
                }
                result[i] = new_point;
            }
        }

        if largest_move < STRING_PULL_CONVERGENCE_THRESHOLD {
            break;
        }
    }

    result
}
