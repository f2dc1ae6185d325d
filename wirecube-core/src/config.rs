//! Scene configuration types
//!
//! Everything the render loop needs to know that is not a property of the
//! panel itself. The firmware runs with [`SceneConfig::default`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wirecube_protocol::Orientation;

use crate::color::Rgb565;

/// How the projection aspect factor is derived from the surface size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AspectRatio {
    /// `height / width`, the classic demo setting
    #[default]
    HeightOverWidth,
    /// `width / height`
    WidthOverHeight,
}

impl AspectRatio {
    /// Aspect factor for a `width` x `height` surface
    ///
    /// Degenerate sizes give 1.0.
    pub fn factor(self, width: u16, height: u16) -> f32 {
        if width == 0 || height == 0 {
            return 1.0;
        }
        let (w, h) = (width as f32, height as f32);
        match self {
            AspectRatio::HeightOverWidth => h / w,
            AspectRatio::WidthOverHeight => w / h,
        }
    }
}

/// Scene and animation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Panel orientation applied before the first frame
    pub orientation: Orientation,
    /// Wireframe colour
    pub foreground: Rgb565,
    /// Clear/erase colour
    pub background: Rgb565,
    /// Rotation advance per frame (radians)
    pub theta_step: f32,
    /// Distance the model is pushed along +Z before projection
    pub z_offset: f32,
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// X rotation rate relative to the Z rotation
    pub x_rate: f32,
    /// Projection aspect derivation
    pub aspect: AspectRatio,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            foreground: Rgb565::GREEN,
            background: Rgb565::BLACK,
            theta_step: 0.05,
            z_offset: 3.0,
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
            x_rate: 0.5,
            aspect: AspectRatio::HeightOverWidth,
        }
    }
}
