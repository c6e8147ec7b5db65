use crate::constants::{PARALLAX_MAX_PX, PARALLAX_SMOOTHING};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub smoothing: f32,
    pub max_px: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            smoothing: PARALLAX_SMOOTHING,
            max_px: PARALLAX_MAX_PX,
        }
    }
}

/// Pointer position eased toward, in \[-1, 1\] on both axes.
#[derive(Clone, Debug)]
pub struct Parallax {
    pub target: Vec2,
    pub current: Vec2,
    smoothing: f32,
}

impl Parallax {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            smoothing,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.target = Vec2::new(x / width * 2.0 - 1.0, y / height * 2.0 - 1.0)
            .clamp(Vec2::splat(-1.0), Vec2::ONE);
    }

    /// Pointer left the window: drift back to centre.
    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let alpha = 1.0 - (-self.smoothing * dt).exp();
        self.current += (self.target - self.current) * alpha;
    }

    /// Pixel offset for a layer; deeper layers move further.
    pub fn offset(&self, depth: f32, max_px: f32) -> Vec2 {
        self.current * depth * max_px
    }
}
