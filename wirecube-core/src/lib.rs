//! Board-agnostic core logic for the wireframe cube demo
//!
//! This crate contains everything that does not depend on a specific bus or
//! display controller:
//!
//! - RGB565 colour type and palette
//! - `Surface` capability trait and the shared rasterizers (Bresenham line,
//!   midpoint circle, rectangles)
//! - Bitmap font tables and the text cursor
//! - Vector/matrix math and the cube mesh
//! - Render pipeline (rotate, translate, project, draw edges)
//! - Draw-then-erase animation driver
//! - Scene configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod animation;
pub mod color;
pub mod config;
pub mod font;
pub mod geometry;
pub mod render;
pub mod text;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience
pub use animation::Animation;
pub use color::Rgb565;
pub use config::{AspectRatio, SceneConfig};
pub use font::{Font, FontError, Glyph};
pub use render::Renderer;
pub use text::TextCursor;
pub use traits::{DisplayError, Surface, SurfaceExt};
