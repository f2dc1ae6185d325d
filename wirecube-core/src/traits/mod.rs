//! Drawing abstraction traits
//!
//! These traits define the interface between the render pipeline and
//! backend-specific implementations (bus-attached controller, in-memory
//! framebuffer).

pub mod clip;
pub mod surface;

pub use surface::{DisplayError, Surface, SurfaceExt};
