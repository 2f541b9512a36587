//! Environment props: building, tree and grass tile.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::palette;

/// Building, 64x96, with a 3x3 window grid and a ground-floor door.
pub fn building() -> Canvas {
    let mut canvas = Canvas::new(64, 96, palette::BRICK);

    for row in 0..3 {
        for col in 0..3 {
            let x = 8 + col * 16;
            let y = 8 + row * 24;
            canvas.fill_rect(x, y, x + 8, y + 12, palette::WINDOW_LIT);
        }
    }

    // Door runs to the bottom edge (the box overshoots by a row and clips).
    canvas.fill_rect(24, 72, 40, 96, palette::TIMBER);

    canvas
}

/// Tree, 32x48: trunk with a single canopy ellipse on top.
pub fn tree() -> Canvas {
    let mut canvas = Canvas::new(32, 48, Colour::TRANSPARENT);

    canvas.fill_rect(12, 32, 20, 48, palette::TIMBER);
    canvas.fill_ellipse(4, 4, 28, 36, palette::FOLIAGE);

    canvas
}

/// Offset applied to the grass base colour for the cell at (x, y).
///
/// Purely positional, so the texture is identical on every run and every
/// cell with the same `(x + y) % 20` gets the same colour.
fn grass_variation(x: i32, y: i32) -> i32 {
    (x + y).rem_euclid(20) - 10
}

/// Grass tile, 64x64, a checkerboard of 4px cells around the base green.
pub fn grass() -> Canvas {
    let mut canvas = Canvas::new(64, 64, palette::GRASS_BASE);

    let base = palette::GRASS_BASE;
    for x in (0..64).step_by(4) {
        for y in (0..64).step_by(4) {
            let v = grass_variation(x, y);
            let cell = Colour::rgb(
                shift_channel(base.r, v),
                shift_channel(base.g, v),
                shift_channel(base.b, v),
            );
            canvas.fill_rect(x, y, x + 4, y + 4, cell);
        }
    }

    canvas
}

/// Add a signed offset to a channel, clamped to the valid range.
fn shift_channel(channel: u8, offset: i32) -> u8 {
    (i32::from(channel) + offset).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_window_grid() {
        let building = building();
        assert_eq!(building.size(), (64, 96));

        // Window centres at every grid position, brick between them.
        for row in 0..3 {
            for col in 0..3 {
                let x = (12 + col * 16) as u32;
                let y = (14 + row * 24) as u32;
                assert_eq!(building.get(x, y), Some(palette::WINDOW_LIT));
            }
        }
        assert_eq!(building.get(0, 0), Some(palette::BRICK));
        assert_eq!(building.get(20, 14), Some(palette::BRICK));
        // Door reaches the clipped bottom row.
        assert_eq!(building.get(32, 80), Some(palette::TIMBER));
        assert_eq!(building.get(32, 95), Some(palette::TIMBER));
    }

    #[test]
    fn test_tree_layout() {
        let tree = tree();
        assert_eq!(tree.size(), (32, 48));

        assert_eq!(tree.get(16, 20), Some(palette::FOLIAGE));
        assert_eq!(tree.get(16, 47), Some(palette::TIMBER));
        assert_eq!(tree.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_grass_variation_period() {
        // Equal (x + y) % 20 means equal colour.
        assert_eq!(grass_variation(0, 4), grass_variation(4, 0));
        assert_eq!(grass_variation(0, 0), grass_variation(20, 20));

        let grass = grass();
        assert_eq!(grass.size(), (64, 64));
        assert_eq!(grass.get(1, 5), grass.get(5, 1));
        assert_eq!(grass.get(1, 1), grass.get(21, 21));
    }

    #[test]
    fn test_grass_channels_stay_in_range() {
        // The offset spans -10..=9 around (34, 139, 34); clamping keeps every
        // channel a valid u8 by construction, so just pin the extremes.
        assert_eq!(shift_channel(34, -10), 24);
        assert_eq!(shift_channel(139, 9), 148);
        assert_eq!(shift_channel(250, 9), 255);
        assert_eq!(shift_channel(5, -10), 0);
    }

    #[test]
    fn test_grass_is_deterministic() {
        assert_eq!(grass(), grass());
    }
}
