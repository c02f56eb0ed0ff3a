//! Side-scrolling camera with a fixed extent.

use crate::constants::{VIEW_HEIGHT, VIEW_WIDTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            center_x: VIEW_WIDTH / 2.0,
            center_y: VIEW_HEIGHT / 2.0,
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
        }
    }

    /// Track the target's x once it passes the current center; the
    /// camera never scrolls back and y never changes.
    pub fn follow(&mut self, target_x: f64) {
        if target_x > self.center_x {
            self.center_x = target_x;
        }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_center() {
        let camera = Camera::new();
        assert_eq!(camera.center_x, 313.0);
        assert_eq!(camera.center_y, 176.0);
        assert_eq!(camera.left(), 0.0);
        assert_eq!(camera.right(), 626.0);
    }

    #[test]
    fn test_does_not_follow_before_center() {
        let mut camera = Camera::new();
        camera.follow(100.0);
        assert_eq!(camera.center_x, 313.0);
    }

    #[test]
    fn test_follows_past_center() {
        let mut camera = Camera::new();
        camera.follow(500.0);
        assert_eq!(camera.center_x, 500.0);
        assert_eq!(camera.left(), 500.0 - 313.0);
    }

    #[test]
    fn test_never_scrolls_back() {
        let mut camera = Camera::new();
        camera.follow(500.0);
        camera.follow(400.0);
        assert_eq!(camera.center_x, 500.0);
    }
}
