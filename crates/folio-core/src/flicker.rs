//! Neon-style flicker schedule and the lamp switch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct FlickerConfig {
    pub min_hold_ms: f64,
    pub max_hold_ms: f64,
    pub dip_chance: f64,
    pub blink_chance: f64,
}

impl Default for FlickerConfig {
    fn default() -> Self {
        Self {
            min_hold_ms: 400.0,
            max_hold_ms: 2400.0,
            dip_chance: 0.12,
            blink_chance: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerSegment {
    /// Value written to `--flicker`, in \[0, 1\].
    pub intensity: f32,
    pub hold_ms: f64,
}

pub struct Flicker {
    config: FlickerConfig,
    rng: StdRng,
    pending: VecDeque<FlickerSegment>,
}

impl Flicker {
    pub fn new(config: FlickerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            pending: VecDeque::new(),
        }
    }

    pub fn next_segment(&mut self) -> FlickerSegment {
        if let Some(seg) = self.pending.pop_front() {
            return seg;
        }
        let roll: f64 = self.rng.gen();
        if roll < self.config.blink_chance {
            // off-on-off then back to steady
            self.pending.push_back(FlickerSegment {
                intensity: 1.0,
                hold_ms: self.rng.gen_range(30.0..80.0),
            });
            self.pending.push_back(FlickerSegment {
                intensity: 0.05,
                hold_ms: self.rng.gen_range(30.0..90.0),
            });
            return FlickerSegment {
                intensity: 0.05,
                hold_ms: self.rng.gen_range(40.0..100.0),
            };
        }
        if roll < self.config.blink_chance + self.config.dip_chance {
            return FlickerSegment {
                intensity: self.rng.gen_range(0.2..0.5),
                hold_ms: self.rng.gen_range(40.0..120.0),
            };
        }
        let lo = self.config.min_hold_ms.min(self.config.max_hold_ms);
        let hi = self.config.max_hold_ms.max(lo + 1.0);
        FlickerSegment {
            intensity: self.rng.gen_range(0.9..=1.0),
            hold_ms: self.rng.gen_range(lo..hi),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lamp {
    pub on: bool,
}

impl Default for Lamp {
    fn default() -> Self {
        Self { on: true }
    }
}

impl Lamp {
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    /// Value for the `--lamp` custom property.
    pub fn css_value(&self) -> &'static str {
        if self.on {
            "1"
        } else {
            "0"
        }
    }
}
