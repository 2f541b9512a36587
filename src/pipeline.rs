//! The generation pipeline: directory setup, sprite synthesis, PNG emission.
//!
//! Each sprite is drawn and written independently; failures propagate to the
//! caller immediately and files already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Category, CATALOG};
use crate::error::{AssetError, Result};
use crate::output::{plural, Printer};
use crate::png::write_png;

/// What a successful run produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Relative paths of the written files, in emission order.
    pub written: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.written.len()
    }
}

/// Create the category directories under `root`.
///
/// Idempotent: existing directories (and any files already in them) are left
/// untouched.
pub fn ensure_dirs(root: &Path) -> Result<()> {
    for category in Category::ALL {
        let dir = root.join(category.dir());
        fs::create_dir_all(&dir).map_err(|e| AssetError::Io {
            path: dir.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }
    Ok(())
}

/// Generate every catalogued sprite under `root`, overwriting existing files.
pub fn run(root: &Path, printer: &Printer) -> Result<GenerateReport> {
    ensure_dirs(root)?;

    let mut report = GenerateReport::default();

    for category in Category::ALL {
        let sprites: Vec<_> = CATALOG.iter().filter(|s| s.category == category).collect();
        printer.status(
            "Generating",
            &format!(
                "{} ({})",
                category.label(),
                plural(sprites.len(), "sprite", "sprites")
            ),
        );

        for sprite in sprites {
            let canvas = (sprite.draw)();
            debug_assert_eq!(canvas.size(), (sprite.width, sprite.height));

            let relative = sprite.relative_path();
            write_png(&canvas, &root.join(&relative))?;
            report.written.push(relative);
        }
    }

    Ok(report)
}
