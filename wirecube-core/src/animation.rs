//! Draw-then-erase animation driver

use crate::color::Rgb565;
use crate::config::SceneConfig;
use crate::render::Renderer;
use crate::traits::{DisplayError, Surface};

/// Rotation state advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    theta: f32,
    step: f32,
}

impl Animation {
    /// Start at theta 0, advancing by `step` radians per frame
    pub const fn new(step: f32) -> Self {
        Self { theta: 0.0, step }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.theta_step)
    }

    /// Rotation used by the next frame
    pub const fn theta(&self) -> f32 {
        self.theta
    }

    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Draw the model in `fg`, erase it with `bg` at the same angle, then advance
    ///
    /// The erase pass replays the exact pixel set of the draw pass, so the
    /// surface is back to `bg` wherever the model touched it. On error the
    /// angle is not advanced.
    pub fn frame<S: Surface>(
        &mut self,
        surface: &mut S,
        renderer: &Renderer,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DisplayError> {
        renderer.render_frame(surface, self.theta, fg)?;
        renderer.render_frame(surface, self.theta, bg)?;
        self.theta += self.step;
        Ok(())
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}
