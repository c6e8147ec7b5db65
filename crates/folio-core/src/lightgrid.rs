use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct LightGrid {
    pub cols: usize,
    pub rows: usize,
    /// Wave cycles per second.
    pub wave_speed: f32,
    /// Wavelength in grid-normalized units.
    pub wavelength: f32,
    /// Glow radius around the pointer in grid-normalized units.
    pub glow_radius: f32,
}

impl LightGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            wave_speed: 0.35,
            wavelength: 0.8,
            glow_radius: 0.18,
        }
    }

    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) / self.cols as f32,
            (row as f32 + 0.5) / self.rows as f32,
        )
    }

    /// Intensity in \[0, 1\] of a cell at time `t` seconds. `pointer` is in
    /// grid-normalized coordinates and may lie outside the grid.
    pub fn intensity(&self, col: usize, row: usize, t: f32, pointer: Option<Vec2>) -> f32 {
        let c = self.cell_center(col, row);
        let phase = (c.x + c.y) / self.wavelength.max(1e-3) - t * self.wave_speed;
        let wave = 0.5 + 0.5 * (TAU * phase).sin();
        let base = 0.15 + 0.35 * wave;
        let glow = pointer
            .filter(|p| p.is_finite())
            .map(|p| {
                let r = self.glow_radius.max(1e-3);
                (-(c.distance_squared(p)) / (2.0 * r * r)).exp()
            })
            .unwrap_or(0.0);
        (base + 0.6 * glow).clamp(0.0, 1.0)
    }

    /// Seconds after which the wave pattern repeats, if it moves at all.
    pub fn period(&self) -> Option<f32> {
        (self.wave_speed.is_finite() && self.wave_speed > 0.0).then(|| 1.0 / self.wave_speed)
    }

    /// Advance the clock by `dt`, folded into one wave period so long
    /// sessions keep full float precision.
    pub fn advance(&self, t: f32, dt: f32) -> f32 {
        let next = t + dt;
        match self.period() {
            Some(p) if next.is_finite() => next.rem_euclid(p),
            _ => 0.0,
        }
    }

    /// All cells, row-major.
    pub fn frame(&self, t: f32, pointer: Option<Vec2>) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.cols * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.intensity(col, row, t, pointer));
            }
        }
        out
    }
}
