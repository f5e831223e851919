//! Progress along a smoothed curve
//!
//! Normalized progress in [0, 1] maps onto cumulative Euclidean length.
//! Progress never decreases within one execution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::constants::GEOM_EPSILON;
use crate::smoothing::curve::SmoothCurve;

/// Maps normalized progress to positions on a curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTracker {
    points: Vec<Vec2>,
    /// Cumulative length at each point; same length as `points`
    cumulative: Vec<f32>,
    total_length: f32,
    progress: f32,
}

impl ProgressTracker {
    pub fn new(curve: &SmoothCurve) -> Self {
        let points = curve.points.clone();
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += (*point - points[i - 1]).length();
            }
            cumulative.push(total);
        }
        Self {
            points,
            cumulative,
            total_length: total,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn distance_traveled(&self) -> f32 {
        self.progress * self.total_length
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Restart from the beginning of the curve
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }

    /// Advance by a world-space distance; returns the new progress
    ///
    /// Progress is clamped to [current, 1], so it never moves backward.
    pub fn advance(&mut self, distance: f32) -> f32 {
        if self.total_length < GEOM_EPSILON {
            self.progress = 1.0;
            return self.progress;
        }
        let delta = (distance / self.total_length).max(0.0);
        self.progress = (self.progress + delta).min(1.0);
        self.progress
    }

    /// Position at an arbitrary progress value
    pub fn position_at(&self, progress: f32) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        if self.points.len() == 1 || self.total_length < GEOM_EPSILON {
            return self.points[0];
        }

        let target = progress.clamp(0.0, 1.0) * self.total_length;
        let index = match self
            .cumulative
            .binary_search_by(|len| len.total_cmp(&target))
        {
            Ok(i) => i,
            Err(i) => i,
        };

        if index == 0 {
            return self.points[0];
        }
        if index >= self.points.len() {
            return self.points[self.points.len() - 1];
        }

        let seg_start = self.cumulative[index - 1];
        let seg_len = self.cumulative[index] - seg_start;
        if seg_len < GEOM_EPSILON {
            return self.points[index];
        }
        let t = (target - seg_start) / seg_len;
        self.points[index - 1].lerp(self.points[index], t)
    }

    /// Position at the current progress
    pub fn position(&self) -> Vec2 {
        self.position_at(self.progress)
    }

    /// Index of the last curve point already passed (distance milestone)
    pub fn passed_point_index(&self) -> usize {
        let traveled = self.distance_traveled();
        self.cumulative
            .iter()
            .rposition(|len| *len <= traveled + GEOM_EPSILON)
            .unwrap_or(0)
    }

    pub fn final_point(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}
