use crate::constants::DESIGN_SIZE;
use glam::Vec2;

/// Uniform scale + offset that fits the design square inside a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Largest uniform scale that fits the design canvas, centred.
    pub fn fit(window: Vec2) -> Self {
        let scale = window.x.min(window.y) / DESIGN_SIZE;
        let offset = (window - Vec2::splat(DESIGN_SIZE * scale)) / 2.0;
        Self { scale, offset }
    }

    #[inline]
    pub fn to_design(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    #[inline]
    pub fn to_screen(&self, design: Vec2) -> Vec2 {
        design * self.scale + self.offset
    }
}
