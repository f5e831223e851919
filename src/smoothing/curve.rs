//! Final curve smoothing: Chaikin subdivision and Catmull-Rom splines
//!
//! Chaikin corner-cutting never overshoots its input polygon, which makes it
//! safe for boundary contours. Catmull-Rom interpolates through its control
//! points and can overshoot near sharp turns; it reads better on path curves
//! that string pulling has already tightened.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which smoothing algorithm the pipeline applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurveMethod {
    Chaikin,
    #[default]
    CatmullRom,
}

/// A smoothed curve: ordered points, open or closed
///
/// Closed curves always end with a copy of their first point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothCurve {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl SmoothCurve {
    pub fn open(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(mut points: Vec<Vec2>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if first != last {
                points.push(first);
            }
        }
        Self {
            points,
            closed: true,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total Euclidean length along the points
    pub fn total_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).length())
            .sum()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}

/// Strip a duplicated closing point so ring math sees each vertex once
fn ring_of(points: &[Vec2]) -> &[Vec2] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first == last => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

/// Chaikin corner cutting
///
/// Each iteration replaces every edge with its 25% and 75% points. Open
/// curves keep their endpoints exactly.
pub fn chaikin(points: &[Vec2], iterations: u32, closed: bool) -> Vec<Vec2> {
    if closed {
        let mut ring = ring_of(points).to_vec();
        if ring.len() < 3 {
            return points.to_vec();
        }
        for _ in 0..iterations {
            let mut next = Vec::with_capacity(ring.len() * 2);
            for i in 0..ring.len() {
                let a = ring[i];
                let b = ring[(i + 1) % ring.len()];
                next.push(a + (b - a) * 0.25);
                next.push(a + (b - a) * 0.75);
            }
            ring = next;
        }
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        ring
    } else {
        let mut current = points.to_vec();
        if current.len() < 3 {
            return current;
        }
        for _ in 0..iterations {
            let mut next = Vec::with_capacity(current.len() * 2);
            next.push(current[0]);
            for pair in current.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                next.push(a + (b - a) * 0.25);
                next.push(a + (b - a) * 0.75);
            }
            next.push(current[current.len() - 1]);
            current = next;
        }
        current
    }
}

/// One cubic Catmull-Rom sample at parameter `t` in [0, 1]
fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

/// Catmull-Rom spline through the given control points
///
/// `samples_per_segment` interpolated points are inserted between each pair
/// of control points. Open curves clamp the edge windows; closed curves wrap
/// around and end with a copy of the first point.
pub fn catmull_rom(points: &[Vec2], samples_per_segment: u32, closed: bool) -> Vec<Vec2> {
    if closed {
        let ring = ring_of(points);
        if ring.len() < 3 {
            return points.to_vec();
        }
        let n = ring.len();
        let mut out = Vec::with_capacity(n * (samples_per_segment as usize + 1) + 1);
        for i in 0..n {
            let p0 = ring[(i + n - 1) % n];
            let p1 = ring[i];
            let p2 = ring[(i + 1) % n];
            let p3 = ring[(i + 2) % n];
            out.push(p1);
            for j in 1..=samples_per_segment {
                let t = j as f32 / (samples_per_segment + 1) as f32;
                out.push(catmull_rom_point(p0, p1, p2, p3, t));
            }
        }
        if let Some(first) = out.first().copied() {
            out.push(first);
        }
        out
    } else {
        if points.len() < 3 {
            return points.to_vec();
        }
        let n = points.len();
        let mut out = Vec::with_capacity(n * (samples_per_segment as usize + 1));
        for i in 0..n - 1 {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(n - 1)];
            out.push(p1);
            for j in 1..=samples_per_segment {
                let t = j as f32 / (samples_per_segment + 1) as f32;
                out.push(catmull_rom_point(p0, p1, p2, p3, t));
            }
        }
        out.push(points[n - 1]);
        out
    }
}

/// Apply the configured smoothing method and wrap the result
///
/// `amount` is Chaikin iterations or Catmull-Rom samples per segment; zero
/// passes the points through unchanged.
pub fn smooth(points: &[Vec2], method: CurveMethod, amount: u32, closed: bool) -> SmoothCurve {
    let smoothed = if amount == 0 {
        points.to_vec()
    } else {
        match method {
            CurveMethod::Chaikin => chaikin(points, amount, closed),
            CurveMethod::CatmullRom => catmull_rom(points, amount, closed),
        }
    };

    if closed {
        SmoothCurve::closed(smoothed)
    } else {
        SmoothCurve::open(smoothed)
    }
}
