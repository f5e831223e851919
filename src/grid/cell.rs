//! A single cell of the hex grid

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::grid::coord::HexCoord;
use crate::grid::layout::HexLayout;

/// One hex cell: identity, enabled flag, cached world position, and
/// free-form metadata
///
/// Cells are created once at grid initialization and never deleted during a
/// session; only `enabled` is toggled by grid editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexCell {
    pub coord: HexCoord,
    pub enabled: bool,
    /// Center of the hex in world space, derived from coord + layout
    pub world_position: Vec2,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl HexCell {
    pub fn new(coord: HexCoord, layout: &HexLayout) -> Self {
        Self {
            coord,
            enabled: true,
            world_position: layout.hex_to_world(coord),
            metadata: HashMap::new(),
        }
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }

    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}
