//! Triangle meshes

use heapless::Vec;

use super::vector::Vec3;

/// Maximum triangles per mesh
pub const MAX_TRIANGLES: usize = 32;

/// Three vertices; edges are drawn `p0-p1`, `p1-p2`, `p2-p0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Triangle {
    pub p: [Vec3; 3],
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { p: [a, b, c] }
    }
}

/// Ordered, fixed-capacity triangle list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    tris: Vec<Triangle, MAX_TRIANGLES>,
}

/// Shorthand for the cube table below
const fn tri(v: [f32; 9]) -> Triangle {
    Triangle::new(
        Vec3::new(v[0], v[1], v[2]),
        Vec3::new(v[3], v[4], v[5]),
        Vec3::new(v[6], v[7], v[8]),
    )
}

/// Unit cube with one corner at the origin, two triangles per face
const CUBE: [Triangle; 12] = [
    // South
    tri([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]),
    tri([0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]),
    // East
    tri([1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0]),
    tri([1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0]),
    // North
    tri([1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0]),
    tri([1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]),
    // West
    tri([0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0]),
    tri([0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
    // Top
    tri([0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    tri([0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]),
    // Bottom
    tri([1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    tri([1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
];

impl Mesh {
    /// Build a mesh from a triangle list
    ///
    /// Returns `None` if the list exceeds [`MAX_TRIANGLES`].
    pub fn from_triangles(tris: &[Triangle]) -> Option<Self> {
        let mut list = Vec::new();
        list.extend_from_slice(tris).ok()?;
        Some(Self { tris: list })
    }

    /// The 12-triangle unit cube
    pub fn cube() -> Self {
        let mut tris = Vec::new();
        for t in CUBE {
            // CUBE.len() <= MAX_TRIANGLES
            let _ = tris.push(t);
        }
        Self { tris }
    }

    /// Triangles in draw order
    pub fn triangles(&self) -> &[Triangle] {
        &self.tris
    }

    /// Number of triangles
    pub fn len(&self) -> usize {
        self.tris.len()
    }

    /// Check if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.tris.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_triangles_in_unit_box() {
        let cube = Mesh::cube();
        assert_eq!(cube.len(), 12);
        for t in cube.triangles() {
            for v in t.p {
                for c in [v.x, v.y, v.z] {
                    assert!(c == 0.0 || c == 1.0);
                }
            }
        }
    }

    #[test]
    fn test_cube_covers_all_eight_corners() {
        let cube = Mesh::cube();
        for corner in 0..8u8 {
            let target = Vec3::new(
                (corner & 1) as f32,
                ((corner >> 1) & 1) as f32,
                ((corner >> 2) & 1) as f32,
            );
            assert!(cube.triangles().iter().any(|t| t.p.contains(&target)));
        }
    }

    #[test]
    fn test_from_triangles_respects_capacity() {
        assert!(Mesh::from_triangles(&[Triangle::default(); MAX_TRIANGLES]).is_some());
        assert!(Mesh::from_triangles(&[Triangle::default(); MAX_TRIANGLES + 1]).is_none());
    }
}
