//! Spring-physics shake and noise rumble.

use glam::Vec2;
use rand::Rng;

const MAX_SUBSTEP: f32 = 1.0 / 120.0;
const SETTLE_EPS: f32 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct ShakeConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub kick: f32,
    pub rumble_decay: f32,
    /// Rumble amplitude (px) at full scroll speed.
    pub rumble_scroll_px: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            stiffness: 420.0,
            damping: 14.0,
            kick: 380.0,
            rumble_decay: 5.0,
            rumble_scroll_px: 3.0,
        }
    }
}

/// Damped 2D spring pulled back to the origin.
#[derive(Clone, Debug)]
pub struct Spring2 {
    pub pos: Vec2,
    pub vel: Vec2,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring2 {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            stiffness,
            damping,
        }
    }

    pub fn kick(&mut self, impulse: Vec2) {
        if impulse.is_finite() {
            self.vel += impulse;
        }
    }

    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let accel = -self.stiffness * self.pos - self.damping * self.vel;
            self.vel += accel * h;
            self.pos += self.vel * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.pos = Vec2::ZERO;
            self.vel = Vec2::ZERO;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.pos.length() < SETTLE_EPS && self.vel.length() < SETTLE_EPS
    }
}

/// Random jitter whose amplitude decays after each trigger, with an optional
/// floor driven continuously (e.g. by scroll speed).
#[derive(Clone, Debug, Default)]
pub struct Rumble {
    pub amplitude: f32,
    pub floor: f32,
    pub decay: f32,
}

impl Rumble {
    pub fn new(decay: f32) -> Self {
        Self {
            amplitude: 0.0,
            floor: 0.0,
            decay,
        }
    }

    pub fn trigger(&mut self, strength: f32) {
        if strength.is_finite() {
            self.amplitude = self.amplitude.max(strength.max(0.0));
        }
    }

    pub fn set_floor(&mut self, floor: f32) {
        self.floor = if floor.is_finite() { floor.max(0.0) } else { 0.0 };
    }

    pub fn sample<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Vec2 {
        if dt.is_finite() && dt > 0.0 {
            self.amplitude *= (-self.decay * dt).exp();
        }
        let a = self.amplitude.max(self.floor);
        if a <= 1e-3 {
            return Vec2::ZERO;
        }
        Vec2::new(rng.gen_range(-a..=a), rng.gen_range(-a..=a))
    }
}
