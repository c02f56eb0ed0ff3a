//! The player character: a rabbit with a two-state vertical motion
//! machine (grounded / airborne) under per-frame Euler gravity.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// Hitbox size in world units.
pub const RABBIT_WIDTH: f64 = 55.0;
pub const RABBIT_HEIGHT: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rabbit {
    /// World x of the sprite's top-left corner.
    pub x: f64,
    /// World y of the sprite's top-left corner; equals `ground_level`
    /// while grounded.
    pub y: f64,
    /// Vertical velocity in world units per frame (negative = upward).
    pub velocity_y: f64,
    /// True from takeoff until the next landing.
    pub airborne: bool,
    /// The y the rabbit stands at and never sinks below.
    pub ground_level: f64,
}

impl Rabbit {
    pub fn new(x: f64, ground_level: f64) -> Self {
        Self {
            x,
            y: ground_level,
            velocity_y: 0.0,
            airborne: false,
            ground_level,
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.airborne
    }

    /// Take off if grounded. Jump input while airborne is ignored — no
    /// double jump, no buffering.
    pub fn jump(&mut self, jump_speed: f64) {
        if !self.airborne {
            self.airborne = true;
            self.velocity_y = jump_speed;
        }
    }

    pub fn move_right(&mut self, move_speed: f64) {
        self.x += move_speed;
    }

    /// One frame of vertical motion: accumulate gravity into the
    /// velocity, integrate, and land when the ground is reached. The
    /// landing clamps y exactly to the ground level and zeroes the
    /// velocity.
    pub fn apply_gravity(&mut self, gravity: f64) {
        if self.airborne {
            self.velocity_y += gravity;
            self.y += self.velocity_y;

            if self.y >= self.ground_level {
                self.y = self.ground_level;
                self.velocity_y = 0.0;
                self.airborne = false;
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, RABBIT_WIDTH, RABBIT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rabbit_is_grounded() {
        let rabbit = Rabbit::new(30.0, 180.0);
        assert!(rabbit.is_grounded());
        assert_eq!(rabbit.y, 180.0);
        assert_eq!(rabbit.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.jump(-6.0);
        assert!(rabbit.airborne);
        assert_eq!(rabbit.velocity_y, -6.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.jump(-6.0);
        rabbit.apply_gravity(0.5);

        let velocity_before = rabbit.velocity_y;
        rabbit.jump(-6.0);
        assert_eq!(
            rabbit.velocity_y, velocity_before,
            "jump while airborne must not reset velocity"
        );
    }

    #[test]
    fn test_gravity_has_no_effect_while_grounded() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.apply_gravity(0.5);
        assert_eq!(rabbit.y, 180.0);
        assert_eq!(rabbit.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_arc_frame_sequence() {
        // jump -6, gravity 0.5, ground 180: the velocity accumulates
        // gravity before the position integrates it, so the first three
        // airborne frames land on exactly these positions.
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.jump(-6.0);

        rabbit.apply_gravity(0.5);
        assert_eq!(rabbit.velocity_y, -5.5);
        assert_eq!(rabbit.y, 174.5);

        rabbit.apply_gravity(0.5);
        assert_eq!(rabbit.velocity_y, -5.0);
        assert_eq!(rabbit.y, 169.5);

        rabbit.apply_gravity(0.5);
        assert_eq!(rabbit.velocity_y, -4.5);
        assert_eq!(rabbit.y, 165.0);
    }

    #[test]
    fn test_velocity_after_n_frames_is_exact() {
        // Unsubdivided Euler: v_n = jump + n * gravity while airborne.
        let mut rabbit = Rabbit::new(30.0, 500.0); // deep ground, no landing
        rabbit.jump(-6.0);
        for n in 1..=10u32 {
            rabbit.apply_gravity(0.5);
            assert_eq!(rabbit.velocity_y, -6.0 + n as f64 * 0.5);
        }
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.jump(-6.0);

        for _ in 0..100 {
            rabbit.apply_gravity(0.5);
            assert!(rabbit.y <= 180.0, "y must never exceed ground level");
            if rabbit.is_grounded() {
                break;
            }
        }

        assert!(rabbit.is_grounded(), "rabbit should land within 100 frames");
        assert_eq!(rabbit.y, 180.0, "landing snaps y exactly to ground level");
        assert_eq!(rabbit.velocity_y, 0.0);
    }

    #[test]
    fn test_move_right() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.move_right(0.7);
        rabbit.move_right(0.7);
        assert!((rabbit.x - 31.4).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_track_position() {
        let mut rabbit = Rabbit::new(30.0, 180.0);
        rabbit.move_right(10.0);
        let bounds = rabbit.bounds();
        assert_eq!(bounds.x, 40.0);
        assert_eq!(bounds.y, 180.0);
        assert_eq!(bounds.width, RABBIT_WIDTH);
        assert_eq!(bounds.height, RABBIT_HEIGHT);
    }
}
