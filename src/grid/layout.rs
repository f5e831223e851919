//! World-space layout for pointy-top hex grids
//!
//! Converts between axial coordinates and world positions, generates hex
//! polygon corners, and optionally applies an isometric view projection.
//! All downstream geometry (waypoints, string pulling, curves) operates in
//! projected space, so the containment math stays consistent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_HEX_SIZE;
use crate::grid::coord::HexCoord;

/// Optional view projection applied after the axial-to-plane conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Projection {
    /// Plane coordinates pass through unchanged
    #[default]
    Flat,
    /// Classic 2:1-style isometric skew; `y_scale` flattens the vertical axis
    Isometric { y_scale: f32 },
}

/// Grid layout parameters: hex size, world origin, and projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Distance from hex center to corner
    pub hex_size: f32,
    /// World position of the (0, 0) hex center
    pub origin: Vec2,
    pub projection: Projection,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            origin: Vec2::ZERO,
            projection: Projection::Flat,
        }
    }
}

impl HexLayout {
    pub fn new(hex_size: f32) -> Self {
        Self {
            hex_size,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Convert hex coordinate to world position (center of hex)
    pub fn hex_to_world(&self, coord: HexCoord) -> Vec2 {
        let sqrt3 = 3.0_f32.sqrt();
        let x = self.hex_size * (sqrt3 * coord.q as f32 + sqrt3 / 2.0 * coord.r as f32);
        let y = self.hex_size * (3.0 / 2.0 * coord.r as f32);
        self.origin + self.project(Vec2::new(x, y))
    }

    /// Convert world position to the nearest hex coordinate
    pub fn world_to_hex(&self, position: Vec2) -> HexCoord {
        let plane = self.unproject(position - self.origin);
        let q = (3.0_f32.sqrt() / 3.0 * plane.x - 1.0 / 3.0 * plane.y) / self.hex_size;
        let r = (2.0 / 3.0 * plane.y) / self.hex_size;
        HexCoord::round(q, r)
    }

    /// The 6 corners of a hex polygon, counterclockwise from the lower-right
    pub fn polygon_corners(&self, coord: HexCoord) -> [Vec2; 6] {
        let sqrt3 = 3.0_f32.sqrt();
        let cx = self.hex_size * (sqrt3 * coord.q as f32 + sqrt3 / 2.0 * coord.r as f32);
        let cy = self.hex_size * (3.0 / 2.0 * coord.r as f32);

        let mut corners = [Vec2::ZERO; 6];
        for (k, corner) in corners.iter_mut().enumerate() {
            // Pointy-top: corners at 60k - 30 degrees
            let angle = (60.0 * k as f32 - 30.0).to_radians();
            let plane = Vec2::new(cx + self.hex_size * angle.cos(), cy + self.hex_size * angle.sin());
            *corner = self.origin + self.project(plane);
        }
        corners
    }

    /// Apply the view projection to a plane-space point
    pub fn project(&self, p: Vec2) -> Vec2 {
        match self.projection {
            Projection::Flat => p,
            Projection::Isometric { y_scale } => {
                Vec2::new(p.x - p.y, (p.x + p.y) * 0.5 * y_scale)
            }
        }
    }

    /// Invert the view projection
    pub fn unproject(&self, p: Vec2) -> Vec2 {
        match self.projection {
            Projection::Flat => p,
            Projection::Isometric { y_scale } => {
                let sum = 2.0 * p.y / y_scale;
                Vec2::new((sum + p.x) / 2.0, (sum - p.x) / 2.0)
            }
        }
    }
}
