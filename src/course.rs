//! The fixed course layout: alternating boxes and carrots along the
//! track, with the finish marker past the last box.

use crate::constants::*;
use crate::entity::{Entity, EntityKind};

/// World x of the endpoint, placed at the far end of the box row.
pub fn endpoint_x() -> f64 {
    BOX_FIRST_X + (BOX_COUNT as f64 - 1.0) * COURSE_SPACING
}

/// Build the standard course: boxes every 200 units starting at x=300,
/// carrots offset 100 units between them, and the endpoint at the end.
pub fn standard_course() -> Vec<Entity> {
    let mut entities = Vec::with_capacity(BOX_COUNT + CARROT_COUNT + 1);

    for i in 0..BOX_COUNT {
        let x = BOX_FIRST_X + i as f64 * COURSE_SPACING;
        entities.push(Entity::new(EntityKind::Box, x, BOX_Y));
    }

    for i in 0..CARROT_COUNT {
        let x = CARROT_FIRST_X + i as f64 * COURSE_SPACING;
        entities.push(Entity::new(EntityKind::Carrot, x, CARROT_Y));
    }

    entities.push(Entity::new(EntityKind::Endpoint, endpoint_x(), ENDPOINT_Y));

    entities
}
