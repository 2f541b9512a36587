//! traffic-assets - Placeholder sprite generator
//!
//! A library for drawing the fixed set of vehicle, road, traffic-light and
//! environment sprites used by the traffic simulation, and writing them out
//! as PNG files under `assets/`.

pub mod canvas;
pub mod catalog;
pub mod colour;
pub mod error;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod png;
pub mod sprites;

pub use canvas::Canvas;
pub use catalog::{Category, Sprite, CATALOG};
pub use colour::Colour;
pub use error::{AssetError, Result};
pub use pipeline::{ensure_dirs, run, GenerateReport};
pub use png::write_png;
pub use sprites::Signal;
