//! Vector and matrix math for the software 3-D pipeline
//!
//! Vectors are transformed as row vectors (`v * M`), with an implicit
//! homogeneous `w = 1`.

pub mod matrix;
pub mod mesh;
pub mod vector;

pub use matrix::Mat4;
pub use mesh::{Mesh, Triangle, MAX_TRIANGLES};
pub use vector::Vec3;
