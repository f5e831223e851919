//! Hex coordinate system (axial coordinates)
//!
//! Uses axial coordinates (q, r) for easy neighbor calculation. Cube s is
//! always derived, never stored.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate
///
/// Ord is lexical by (q, r), which gives the deterministic tie-break order
/// used by the pathfinder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Convert axial to cube coordinates for algorithms
    pub fn to_cube(&self) -> (i32, i32, i32) {
        (self.q, self.s(), self.r)
    }

    /// Convert cube coordinates back to axial; x + y + z must be 0
    pub fn from_cube(x: i32, _y: i32, z: i32) -> Self {
        Self::new(x, z)
    }

    /// Hex distance: minimum number of adjacent-cell steps
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Get all 6 neighboring hex coordinates
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q + 1, self.r - 1),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q, self.r + 1),
        ]
    }

    /// Get hex coordinates in a line from self to other (inclusive)
    pub fn line_to(&self, other: &Self) -> Vec<HexCoord> {
        let n = self.distance(other) as i32;
        if n == 0 {
            return vec![*self];
        }

        let mut results = Vec::with_capacity((n + 1) as usize);
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let q = self.q as f32 + (other.q - self.q) as f32 * t;
            let r = self.r as f32 + (other.r - self.r) as f32 * t;
            results.push(Self::round(q, r));
        }
        results
    }

    /// Round fractional hex coordinates to the nearest integer hex
    pub fn round(q: f32, r: f32) -> Self {
        let s = -q - r;
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }

        Self::new(rq as i32, rr as i32)
    }

    /// Get all hexes within range (inclusive)
    pub fn hexes_in_range(&self, range: u32) -> Vec<HexCoord> {
        let range = range as i32;
        let mut results = Vec::new();
        for q in -range..=range {
            for r in (-range).max(-q - range)..=range.min(-q + range) {
                results.push(HexCoord::new(self.q + q, self.r + r));
            }
        }
        results
    }
}

/// Direction enum for hex adjacency and facing
///
/// Offsets follow a y-down world convention: SouthEast is (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HexDirection {
    #[default]
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

/// All six directions in clockwise order (screen coordinates, y-down)
pub const CLOCKWISE_DIRECTIONS: [HexDirection; 6] = [
    HexDirection::East,
    HexDirection::SouthEast,
    HexDirection::SouthWest,
    HexDirection::West,
    HexDirection::NorthWest,
    HexDirection::NorthEast,
];

impl HexDirection {
    /// Get the hex offset for this direction
    pub fn offset(&self) -> HexCoord {
        match self {
            HexDirection::East => HexCoord::new(1, 0),
            HexDirection::NorthEast => HexCoord::new(1, -1),
            HexDirection::NorthWest => HexCoord::new(0, -1),
            HexDirection::West => HexCoord::new(-1, 0),
            HexDirection::SouthWest => HexCoord::new(-1, 1),
            HexDirection::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// Get opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::NorthWest => HexDirection::SouthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::SouthEast => HexDirection::NorthWest,
        }
    }

    /// Direction matching a unit-step coordinate offset, if any
    pub fn from_offset(offset: HexCoord) -> Option<Self> {
        CLOCKWISE_DIRECTIONS
            .into_iter()
            .find(|d| d.offset() == offset)
    }

    /// Index of this direction within the clockwise ordering
    pub fn clockwise_index(&self) -> usize {
        match self {
            HexDirection::East => 0,
            HexDirection::SouthEast => 1,
            HexDirection::SouthWest => 2,
            HexDirection::West => 3,
            HexDirection::NorthWest => 4,
            HexDirection::NorthEast => 5,
        }
    }

    /// Rotate clockwise by the given number of 60-degree steps
    pub fn rotated_cw(&self, steps: usize) -> Self {
        CLOCKWISE_DIRECTIONS[(self.clockwise_index() + steps) % 6]
    }

    /// All directions
    pub fn all() -> [HexDirection; 6] {
        CLOCKWISE_DIRECTIONS
    }
}
