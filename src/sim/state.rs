//! World state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::frame::RotatingFrame;
use crate::config::Config;
use crate::polar_to_cartesian;

/// An opaque RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Sample a bright, saturated color: uniform hue, saturation in
    /// [0.5, 1], value in [0.8, 1].
    pub fn random_bright(rng: &mut impl Rng) -> Self {
        let hue = rng.random_range(0.0..1.0f32);
        let saturation = rng.random_range(0.5..=1.0f32);
        let value = rng.random_range(0.8..=1.0f32);
        Self::from_hsv(hue, saturation, value)
    }

    /// HSV to RGB, all components in [0, 1]
    fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h * 6.0;
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match h as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

/// A ball's physical state, expressed in the container's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Position, origin at the container center
    pub pos: Vec2,
    /// Velocity in local units/second
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Complete world state (deterministic)
///
/// Sole owner of the frame and every body; the renderer reads through a
/// shared borrow after each tick.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The rotating container
    pub frame: RotatingFrame,
    /// Live bodies in spawn order; append-only, never removed
    pub bodies: Vec<Body>,
    /// Configuration the world was built from
    pub config: Config,
    /// Elapsed seconds since the last spawn
    pub(crate) spawn_timer: f32,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create a new world from a validated configuration and a seed
    pub fn new(config: Config, seed: u64) -> Self {
        let center = Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0);
        let frame = RotatingFrame::new(center, config.half_extent(), config.rotation_speed);
        Self {
            seed,
            time_ticks: 0,
            frame,
            bodies: Vec::new(),
            config,
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Append one freshly sampled body: uniform position inside the spawn
    /// box, uniform direction, uniform speed within the configured range.
    pub fn spawn_body(&mut self) {
        let bound = self.frame.half_extent - self.config.spawn_margin;
        let pos = Vec2::new(
            self.rng.random_range(-bound..=bound),
            self.rng.random_range(-bound..=bound),
        );
        let direction = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = self
            .rng
            .random_range(self.config.speed_min..=self.config.speed_max);
        let color = Color::random_bright(&mut self.rng);

        self.bodies.push(Body {
            pos,
            vel: polar_to_cartesian(speed, direction),
            radius: self.config.ball_radius,
            color,
        });
    }
}
