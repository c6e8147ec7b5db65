//! Scroll velocity model.
//!
//! Wheel deltas become impulses on a one-dimensional body with mass; each
//! animation frame the speed decays under combined quadratic and linear drag.
//! The tracker publishes a [`ScrollSample`] on every frame while the body is
//! moving, plus one final sample when it comes to rest.

use crate::bus::{EventBus, SubscriptionId};
use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub mass: f32,
    pub drag: f32,
    pub linear_drag: f32,
    pub impulse_scale: f32,
    pub max_impulse: f32,
    pub top_speed: f32,
    pub rest_threshold: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            mass: SCROLL_MASS,
            drag: SCROLL_DRAG,
            linear_drag: SCROLL_LINEAR_DRAG,
            impulse_scale: SCROLL_IMPULSE_SCALE,
            max_impulse: SCROLL_MAX_IMPULSE,
            top_speed: SCROLL_TOP_SPEED,
            rest_threshold: SCROLL_REST_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Signed velocity in px/s (positive scrolls down the page).
    pub velocity: f32,
    /// Magnitude of `velocity`, never negative.
    pub speed: f32,
    /// `speed / top_speed` clamped to \[0, 1\].
    pub normalized: f32,
    /// -1.0, 0.0 or 1.0.
    pub direction: f32,
}

/// Converts a `WheelEvent` delta into pixels according to its delta mode.
#[inline]
pub fn normalize_wheel_delta(delta: f64, delta_mode: u32) -> f32 {
    let d = delta as f32;
    match delta_mode {
        DELTA_MODE_LINE => d * PX_PER_LINE,
        DELTA_MODE_PAGE => d * PX_PER_PAGE,
        _ => d,
    }
}

/// Follows one finger across touch events and turns its vertical travel
/// into wheel-style pixel deltas (finger moving up scrolls down).
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchDrag {
    last_y: Option<f32>,
}

impl TouchDrag {
    pub fn start(&mut self, y: f32) {
        self.last_y = y.is_finite().then_some(y);
    }

    /// Delta since the previous position, or `None` when no drag is active.
    pub fn move_to(&mut self, y: f32) -> Option<f64> {
        if !y.is_finite() {
            return None;
        }
        let prev = self.last_y.replace(y)?;
        Some((prev - y) as f64)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct ScrollPhysics {
    config: ScrollConfig,
    speed: f32,
    direction: f32,
}

impl ScrollPhysics {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            speed: 0.0,
            direction: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Apply a wheel delta in pixels.
    pub fn impulse(&mut self, delta_px: f32) {
        if !delta_px.is_finite() || delta_px == 0.0 {
            return;
        }
        let magnitude = (delta_px.abs() * self.config.impulse_scale).min(self.config.max_impulse);
        let mass = self.config.mass.max(f32::EPSILON);
        let dv = magnitude / mass;
        let dir = delta_px.signum();
        if self.speed > 0.0 && dir != self.direction {
            // Reversing bleeds off the old motion before adding the new one.
            if dv >= self.speed {
                self.speed = dv - self.speed;
                self.direction = dir;
            } else {
                self.speed -= dv;
            }
        } else {
            self.speed += dv;
            self.direction = dir;
        }
        self.speed = self.speed.min(self.config.top_speed * 2.0);
        if self.speed == 0.0 {
            self.direction = 0.0;
        }
    }

    /// Advance the drag model by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.speed == 0.0 {
            return;
        }
        let mass = self.config.mass.max(f32::EPSILON);
        let decel =
            (self.config.drag * self.speed * self.speed + self.config.linear_drag * self.speed) / mass;
        self.speed = (self.speed - decel * dt).max(0.0);
        if self.speed < self.config.rest_threshold {
            self.speed = 0.0;
            self.direction = 0.0;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }

    pub fn sample(&self) -> ScrollSample {
        let top = self.config.top_speed.max(f32::EPSILON);
        ScrollSample {
            velocity: self.speed * self.direction,
            speed: self.speed,
            normalized: (self.speed / top).clamp(0.0, 1.0),
            direction: self.direction,
        }
    }
}

/// Physics plus the "update" bus that effects subscribe to.
pub struct ScrollTracker {
    physics: ScrollPhysics,
    bus: EventBus<ScrollSample>,
    was_moving: bool,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            physics: ScrollPhysics::new(config),
            bus: EventBus::new(),
            was_moving: false,
        }
    }

    pub fn on_wheel(&mut self, delta: f64, delta_mode: u32) {
        self.physics
            .impulse(normalize_wheel_delta(delta, delta_mode));
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollSample) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Step the model and publish. Returns whether a sample was emitted.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.physics.step(dt);
        let moving = self.physics.is_moving();
        let emit = moving || self.was_moving;
        if emit {
            let sample = self.physics.sample();
            self.bus.emit(&sample);
        }
        self.was_moving = moving;
        emit
    }

    pub fn sample(&self) -> ScrollSample {
        self.physics.sample()
    }

    pub fn physics(&self) -> &ScrollPhysics {
        &self.physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_is_capped() {
        let mut p = ScrollPhysics::new(ScrollConfig::default());
        p.impulse(1.0e6);
        assert_eq!(p.sample().speed, SCROLL_MAX_IMPULSE / SCROLL_MASS);
    }

    #[test]
    fn zero_and_non_finite_input_are_ignored() {
        let mut p = ScrollPhysics::new(ScrollConfig::default());
        p.impulse(0.0);
        p.impulse(f32::NAN);
        p.impulse(f32::INFINITY);
        assert!(!p.is_moving());
        p.impulse(10.0);
        let before = p.sample();
        p.step(0.0);
        p.step(f32::NAN);
        assert_eq!(before, p.sample());
    }

    #[test]
    fn wheel_delta_modes() {
        assert_eq!(normalize_wheel_delta(3.0, DELTA_MODE_LINE), 48.0);
        assert_eq!(normalize_wheel_delta(1.0, DELTA_MODE_PAGE), PX_PER_PAGE);
        assert_eq!(normalize_wheel_delta(5.0, DELTA_MODE_PIXEL), 5.0);
    }
}
