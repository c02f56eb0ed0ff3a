//! World entities: boxes, carrots, and the endpoint marker.
//!
//! All three share one tagged representation — a kind enum plus a
//! per-kind data table (sprite id, draw scale, hitbox size) — instead of
//! a type per texture. Entities live in a single contiguous `Vec` owned
//! by the session; collected carrots are swap-removed by index.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Scenery obstacle. Overlap has no effect.
    Box,
    /// Collectible. Overlap removes it and scores.
    Carrot,
    /// Finish marker. Overlap completes the run.
    Endpoint,
}

impl EntityKind {
    /// Sprite identifier used by the renderer.
    pub fn sprite(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Carrot => "carrot",
            Self::Endpoint => "endpoint",
        }
    }

    /// Draw scale applied to the base sprite art.
    pub fn scale(&self) -> f64 {
        match self {
            Self::Box => 0.25,
            Self::Carrot => 0.2,
            Self::Endpoint => 1.0,
        }
    }

    /// Hitbox size in world units (width, height).
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Box => (55.0, 55.0),
            Self::Carrot => (40.0, 40.0),
            Self::Endpoint => (50.0, 100.0),
        }
    }

    /// True if overlapping this entity removes it and increments the score.
    pub fn is_collectible(&self) -> bool {
        matches!(self, Self::Carrot)
    }

    /// True if overlapping this entity ends the run as completed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Endpoint)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// World x of the top-left corner.
    pub x: f64,
    /// World y of the top-left corner.
    pub y: f64,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    pub fn bounds(&self) -> Rect {
        let (width, height) = self.kind.size();
        Rect::new(self.x, self.y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_table() {
        assert_eq!(EntityKind::Box.sprite(), "box");
        assert_eq!(EntityKind::Carrot.sprite(), "carrot");
        assert_eq!(EntityKind::Endpoint.sprite(), "endpoint");

        assert!((EntityKind::Box.scale() - 0.25).abs() < f64::EPSILON);
        assert!((EntityKind::Carrot.scale() - 0.2).abs() < f64::EPSILON);

        assert_eq!(EntityKind::Endpoint.size(), (50.0, 100.0));
    }

    #[test]
    fn test_only_carrots_are_collectible() {
        assert!(EntityKind::Carrot.is_collectible());
        assert!(!EntityKind::Box.is_collectible());
        assert!(!EntityKind::Endpoint.is_collectible());
    }

    #[test]
    fn test_only_endpoint_is_terminal() {
        assert!(EntityKind::Endpoint.is_terminal());
        assert!(!EntityKind::Box.is_terminal());
        assert!(!EntityKind::Carrot.is_terminal());
    }

    #[test]
    fn test_bounds_use_kind_size() {
        let carrot = Entity::new(EntityKind::Carrot, 400.0, 245.0);
        let bounds = carrot.bounds();
        assert_eq!(bounds.x, 400.0);
        assert_eq!(bounds.y, 245.0);
        assert_eq!(bounds.width, 40.0);
        assert_eq!(bounds.height, 40.0);
    }
}
