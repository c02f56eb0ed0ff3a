//! Glyph art for the run scene, keyed by the entity sprite table.

use crate::entity::EntityKind;
use ratatui::style::Color;

pub const RABBIT_COLOR: Color = Color::White;

/// Rabbit rows, top to bottom: ears, body, feet. The feet row carries
/// the two-frame run animation; airborne shows both feet tucked.
pub fn rabbit_rows(anim_frame: u32, airborne: bool) -> [&'static str; 3] {
    let feet = if airborne {
        "/\\"
    } else if anim_frame == 0 {
        "/ "
    } else {
        " \\"
    };
    ["\\/", "\u{2588}\u{2588}", feet]
}

/// Glyph and color per entity kind.
pub fn entity_glyph(kind: EntityKind) -> (char, Color) {
    match kind {
        EntityKind::Box => ('#', Color::Rgb(140, 110, 80)),
        EntityKind::Carrot => ('*', Color::Rgb(237, 145, 33)),
        EntityKind::Endpoint => ('\u{2588}', Color::Red),
    }
}

/// Cell footprint per entity kind (cols, rows), scaled from the world
/// hitbox the same way the sprites are scaled from their base art.
pub fn entity_cells(kind: EntityKind) -> (u16, u16) {
    match kind {
        EntityKind::Box => (2, 2),
        EntityKind::Carrot => (1, 1),
        EntityKind::Endpoint => (2, 4),
    }
}
