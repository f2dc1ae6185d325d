//! Wireframe render pipeline
//!
//! Per vertex: rotate about Z by theta, rotate about X by `theta * x_rate`,
//! push along +Z, project, then map normalized device coordinates onto
//! the surface. Each triangle is drawn as its three edges. There is no
//! culling, depth sorting or near-plane clipping; off-surface pixels are
//! dropped by the surface.

use crate::color::Rgb565;
use crate::config::SceneConfig;
use crate::geometry::{Mat4, Mesh, Vec3};
use crate::traits::{DisplayError, Surface, SurfaceExt};

/// Screen-space point, truncated toward zero
pub type ScreenPoint = (i32, i32);

/// Projected triangle in vertex order
pub type ScreenTriangle = [ScreenPoint; 3];

/// Projected coordinates are clamped to this many surface sizes
const SCREEN_LIMIT: f32 = 4.0;

/// Per-frame model rotation
#[derive(Debug, Clone, Copy)]
struct Pose {
    rot_z: Mat4,
    rot_x: Mat4,
}

/// Mesh, projection and surface size for one scene
#[derive(Debug, Clone)]
pub struct Renderer {
    mesh: Mesh,
    projection: Mat4,
    width: u16,
    height: u16,
    z_offset: f32,
    x_rate: f32,
}

impl Renderer {
    /// Cube scene for a `width` x `height` surface
    pub fn new(width: u16, height: u16, config: &SceneConfig) -> Self {
        Self::with_mesh(Mesh::cube(), width, height, config)
    }

    /// Scene for an arbitrary mesh
    pub fn with_mesh(mesh: Mesh, width: u16, height: u16, config: &SceneConfig) -> Self {
        let aspect = config.aspect.factor(width, height);
        Self {
            mesh,
            projection: Mat4::projection(config.fov_degrees, aspect, config.near, config.far),
            width,
            height,
            z_offset: config.z_offset,
            x_rate: config.x_rate,
        }
    }

    fn pose(&self, theta: f32) -> Pose {
        Pose {
            rot_z: Mat4::rotation_z(theta),
            rot_x: Mat4::rotation_x(theta * self.x_rate),
        }
    }

    fn project_with(&self, pose: &Pose, v: Vec3) -> ScreenPoint {
        let mut view = pose.rot_x.transform(pose.rot_z.transform(v));
        view.z += self.z_offset;
        let ndc = self.projection.transform(view);

        let x = (ndc.x + 1.0) * 0.5 * self.width as f32;
        let y = (ndc.y + 1.0) * 0.5 * self.height as f32;

        // Vertices near the eye plane blow up after the divide; keep the
        // rasterizer's step count and arithmetic bounded
        let limit = self.width.max(self.height) as f32 * SCREEN_LIMIT;
        (x.clamp(-limit, limit) as i32, y.clamp(-limit, limit) as i32)
    }

    /// Project a single model-space point at rotation `theta`
    pub fn project_point(&self, v: Vec3, theta: f32) -> ScreenPoint {
        self.project_with(&self.pose(theta), v)
    }

    /// Project every triangle of the mesh at rotation `theta`
    pub fn project_frame(&self, theta: f32) -> impl Iterator<Item = ScreenTriangle> + '_ {
        let pose = self.pose(theta);
        self.mesh
            .triangles()
            .iter()
            .map(move |tri| tri.p.map(|v| self.project_with(&pose, v)))
    }

    /// Draw the three edges of every projected triangle
    pub fn render_frame<S: Surface>(
        &self,
        surface: &mut S,
        theta: f32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        for [a, b, c] in self.project_frame(theta) {
            surface.line(a.0, a.1, b.0, b.1, color)?;
            surface.line(b.0, b.1, c.0, c.1, color)?;
            surface.line(c.0, c.1, a.0, a.1, color)?;
        }
        Ok(())
    }
}
