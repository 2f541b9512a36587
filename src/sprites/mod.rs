//! Sprite generators, one module per category.
//!
//! Every function allocates its own canvas, draws a fixed sequence of
//! primitives and returns the result; nothing here touches the filesystem.

pub mod environment;
pub mod lights;
pub mod roads;
pub mod vehicles;

pub use lights::Signal;
