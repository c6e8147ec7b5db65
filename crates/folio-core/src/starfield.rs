//! Fly-through starfield simulation. Stars live in a unit box in front of
//! the camera and move toward it; the renderer draws one soft sprite per
//! visible star.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FOCAL: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub base_speed: f32,
    pub scroll_speed: f32,
    pub size_px: f32,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            base_speed: STAR_BASE_SPEED,
            scroll_speed: STAR_SCROLL_SPEED,
            size_px: STAR_SIZE_PX,
            seed: 7,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    /// Clip-space centre.
    pub pos: [f32; 2],
    pub size_px: f32,
    pub brightness: f32,
}

impl StarInstance {
    /// How many instances fit in one GPU buffer of `max_buffer_bytes`,
    /// capped at `requested` and never below one.
    pub fn buffer_capacity(requested: usize, max_buffer_bytes: u64) -> usize {
        let per_buffer = max_buffer_bytes / std::mem::size_of::<Self>() as u64;
        let per_buffer = usize::try_from(per_buffer).unwrap_or(usize::MAX);
        requested.min(per_buffer).max(1)
    }
}

pub struct Starfield {
    stars: Vec<Vec3>,
    rng: StdRng,
    config: StarfieldConfig,
}

impl Starfield {
    pub fn new(config: StarfieldConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let stars = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(STAR_NEAR..STAR_DEPTH),
                )
            })
            .collect();
        Self { stars, rng, config }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    /// Move stars toward the viewer. `normalized_speed` is the scroll model's
    /// normalized speed; stars passing the near plane respawn at the back.
    pub fn advance(&mut self, dt: f32, normalized_speed: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let boost = if normalized_speed.is_finite() {
            normalized_speed.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let dz = (self.config.base_speed + self.config.scroll_speed * boost) * dt;
        let span = STAR_DEPTH - STAR_NEAR;
        for s in self.stars.iter_mut() {
            s.z -= dz;
            if s.z <= STAR_NEAR {
                s.z += span * ((STAR_NEAR - s.z) / span).ceil().max(1.0);
                s.z = s.z.clamp(STAR_NEAR + f32::EPSILON, STAR_DEPTH);
                s.x = self.rng.gen_range(-1.0..1.0);
                s.y = self.rng.gen_range(-1.0..1.0);
            }
        }
    }

    /// Visible stars projected for a viewport with `aspect` = width / height.
    pub fn instances(&self, aspect: f32) -> Vec<StarInstance> {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        self.stars
            .iter()
            .filter_map(|s| {
                let p = Vec2::new(s.x, s.y * aspect) * (FOCAL / s.z);
                if p.x.abs() > 1.05 || p.y.abs() > 1.05 {
                    return None;
                }
                let t = (s.z / STAR_DEPTH).clamp(0.0, 1.0);
                // fade in at the back so respawns don't pop
                let fade = ((1.0 - t) / 0.15).clamp(0.0, 1.0);
                Some(StarInstance {
                    pos: p.to_array(),
                    size_px: self.config.size_px * (0.4 + 1.6 * (1.0 - t)),
                    brightness: (1.0 - t).powf(0.7) * fade,
                })
            })
            .collect()
    }
}
