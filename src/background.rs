//! Two-tile looping background.
//!
//! Exactly two tiles exist for the lifetime of a session. A tile that
//! scrolls fully behind the camera is repositioned to the right of the
//! other tile; together they always cover the visible span.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    tile_x: [f64; 2],
    width: f64,
}

impl Background {
    pub fn new(width: f64) -> Self {
        Self {
            tile_x: [0.0, width],
            width,
        }
    }

    /// Re-seat any tile whose right edge has fallen behind the camera's
    /// left edge. Called every frame regardless of movement.
    pub fn update(&mut self, view_left: f64) {
        if view_left > self.tile_x[0] + self.width {
            self.tile_x[0] = self.tile_x[1] + self.width;
        }
        if view_left > self.tile_x[1] + self.width {
            self.tile_x[1] = self.tile_x[0] + self.width;
        }
    }

    /// World x of each tile's left edge.
    pub fn tiles(&self) -> [f64; 2] {
        self.tile_x
    }

    pub fn tile_width(&self) -> f64 {
        self.width
    }

    /// True if the tiles' union covers `[left, right]` with no gap.
    pub fn covers(&self, left: f64, right: f64) -> bool {
        let lo = self.tile_x[0].min(self.tile_x[1]);
        let hi = self.tile_x[0].max(self.tile_x[1]) + self.width;
        let contiguous = (self.tile_x[0] - self.tile_x[1]).abs() <= self.width;
        contiguous && lo <= left && right <= hi
    }
}
