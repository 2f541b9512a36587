//! PNG output for canvases.

use std::path::Path;

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::{AssetError, Result};

/// Write a canvas to a PNG file (8-bit RGBA).
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let img = RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba_buffer())
        .ok_or_else(|| AssetError::Encode {
            path: path.to_path_buf(),
            message: "pixel buffer does not match canvas dimensions".to_string(),
        })?;

    img.save(path).map_err(|e| AssetError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut canvas = Canvas::new(2, 2, Colour::WHITE);
        canvas.fill_rect(0, 0, 0, 0, Colour::rgb(0, 0, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_preserves_transparency() {
        let mut canvas = Canvas::new(2, 1, Colour::TRANSPARENT);
        canvas.fill_rect(1, 0, 1, 0, Colour::new(255, 0, 0, 128));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_unwritable_path_is_encode_error() {
        let canvas = Canvas::new(1, 1, Colour::WHITE);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = write_png(&canvas, &path).unwrap_err();
        assert!(matches!(err, AssetError::Encode { .. }));
    }
}
