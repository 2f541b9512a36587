//! Canvas - an in-memory RGBA pixel grid with the two fill primitives the
//! sprite generators use.
//!
//! Rectangle and ellipse boxes are inclusive of both corners, and coordinates
//! outside the canvas clip silently. Several sprite designs lean on the
//! clipping (the building door and tree trunk both run past the bottom edge).
//! Later draws overwrite earlier pixels outright; there is no blending.

use crate::colour::Colour;

/// An owned rectangular pixel buffer (row-major: pixels[y][x]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Vec<Colour>>,
}

impl Canvas {
    /// Create a canvas filled with a uniform background colour.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![background; width as usize]; height as usize],
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Fill a rectangle spanning `x0..=x1`, `y0..=y1`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let Some((x_lo, x_hi)) = self.clip_x(x0, x1) else {
            return;
        };
        let Some((y_lo, y_hi)) = self.clip_y(y0, y1) else {
            return;
        };

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                self.pixels[y][x] = colour;
            }
        }
    }

    /// Fill the ellipse inscribed in the box `x0..=x1` by `y0..=y1`.
    ///
    /// A pixel is inside when its centre satisfies
    /// `((x - cx) / rx)^2 + ((y - cy) / ry)^2 <= 1`.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let cx = f64::from(x0 + x1) / 2.0;
        let cy = f64::from(y0 + y1) / 2.0;
        let rx = f64::from(x1 - x0) / 2.0;
        let ry = f64::from(y1 - y0) / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        let Some((x_lo, x_hi)) = self.clip_x(x0, x1) else {
            return;
        };
        let Some((y_lo, y_hi)) = self.clip_y(y0, y1) else {
            return;
        };

        for y in y_lo..=y_hi {
            let dy = (y as f64 - cy) / ry;
            for x in x_lo..=x_hi {
                let dx = (x as f64 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.pixels[y][x] = colour;
                }
            }
        }
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for PNG output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }

    /// Clamp an inclusive x span to the canvas; `None` if fully outside.
    fn clip_x(&self, x0: i32, x1: i32) -> Option<(usize, usize)> {
        let lo = x0.max(0);
        let hi = x1.min(self.width as i32 - 1);
        (lo <= hi).then_some((lo as usize, hi as usize))
    }

    fn clip_y(&self, y0: i32, y1: i32) -> Option<(usize, usize)> {
        let lo = y0.max(0);
        let hi = y1.min(self.height as i32 - 1);
        (lo <= hi).then_some((lo as usize, hi as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Colour = Colour::rgb(255, 0, 0);

    #[test]
    fn test_new_uniform_background() {
        let canvas = Canvas::new(3, 2, Colour::WHITE);
        assert_eq!(canvas.size(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.get(x, y), Some(Colour::WHITE));
            }
        }
        assert_eq!(canvas.get(3, 0), None);
    }

    #[test]
    fn test_fill_rect_inclusive_corners() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_rect(1, 1, 2, 2, INK);

        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(2, 2), Some(INK));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(3, 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_rect(2, 2, 10, 10, INK);

        assert_eq!(canvas.get(3, 3), Some(INK));
        assert_eq!(canvas.get(1, 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_negative_origin_clips() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_rect(-3, -3, 1, 1, INK);

        assert_eq!(canvas.get(0, 0), Some(INK));
        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(2, 2), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_fully_outside_is_noop() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_rect(10, 10, 20, 20, INK);
        canvas.fill_rect(-5, -5, -1, -1, INK);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.get(x, y), Some(Colour::TRANSPARENT));
            }
        }
    }

    #[test]
    fn test_later_draw_overwrites_earlier() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_rect(0, 0, 3, 3, Colour::WHITE);
        canvas.fill_rect(1, 1, 2, 2, INK);

        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(1, 1), Some(INK));
    }

    #[test]
    fn test_fill_ellipse_centre_in_corners_out() {
        let mut canvas = Canvas::new(8, 8, Colour::TRANSPARENT);
        canvas.fill_ellipse(0, 0, 6, 6, INK);

        // Centre and axis extremes are inside.
        assert_eq!(canvas.get(3, 3), Some(INK));
        assert_eq!(canvas.get(0, 3), Some(INK));
        assert_eq!(canvas.get(3, 0), Some(INK));
        assert_eq!(canvas.get(6, 3), Some(INK));
        // Bounding-box corners are outside the circle.
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(6, 6), Some(Colour::TRANSPARENT));
        // Untouched pixel beyond the box.
        assert_eq!(canvas.get(7, 3), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_ellipse_clips() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.fill_ellipse(-2, -2, 5, 5, INK);

        // Ellipse centre (1.5, 1.5) covers the middle of the canvas.
        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(2, 2), Some(INK));
    }

    #[test]
    fn test_to_rgba_buffer_row_major() {
        let mut canvas = Canvas::new(2, 1, Colour::TRANSPARENT);
        canvas.fill_rect(1, 0, 1, 0, INK);

        assert_eq!(canvas.to_rgba_buffer(), vec![0, 0, 0, 0, 255, 0, 0, 255]);
    }
}
