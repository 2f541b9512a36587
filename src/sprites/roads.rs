//! Road tiles: straight segments, an intersection and a zebra crossing.

use crate::canvas::Canvas;
use crate::palette;

/// Horizontal road, 128x64, with a dashed centre line every 16px.
pub fn horizontal() -> Canvas {
    let mut canvas = Canvas::new(128, 64, palette::ASPHALT);

    for x in (0..128).step_by(16) {
        canvas.fill_rect(x, 30, x + 8, 34, palette::MARKING);
    }

    canvas
}

/// Vertical road, 64x128. Same markings as [`horizontal`], rotated.
pub fn vertical() -> Canvas {
    let mut canvas = Canvas::new(64, 128, palette::ASPHALT);

    for y in (0..128).step_by(16) {
        canvas.fill_rect(30, y, 34, y + 8, palette::MARKING);
    }

    canvas
}

/// Intersection, 64x64, with crosswalk stripes crossing in the middle.
pub fn intersection() -> Canvas {
    let mut canvas = Canvas::new(64, 64, palette::ASPHALT_DARK);

    for i in (0..64).step_by(8) {
        canvas.fill_rect(i, 28, i + 4, 36, palette::MARKING);
        canvas.fill_rect(28, i, 36, i + 4, palette::MARKING);
    }

    canvas
}

/// Zebra crossing, 64x32, full-height stripes every 8px.
pub fn zebra() -> Canvas {
    let mut canvas = Canvas::new(64, 32, palette::MARKING);

    for x in (0..64).step_by(8) {
        canvas.fill_rect(x, 0, x + 4, 32, palette::TYRE);
    }

    canvas
}
