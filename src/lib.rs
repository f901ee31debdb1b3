//! Roto Box - bouncing balls inside a rotating square container
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rotating frame, bodies, collisions)
//! - `config`: Host-facing configuration surface
//!
//! Windowing, event polling, frame pacing and any frame capture belong to
//! the embedding application; the library only exposes world state plus a
//! `tick` entry point.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{Body, Color, RotatingFrame, SimState, tick};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Canvas dimensions (world space)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Side length of the square container
    pub const SQUARE_SIZE: f32 = 400.0;

    /// Container rotation speed (radians/second, 10 degrees per second)
    pub const ROTATION_SPEED: f32 = std::f32::consts::PI / 18.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_MIN: f32 = 100.0;
    pub const BALL_SPEED_MAX: f32 = 200.0;

    /// Seconds between ball spawns
    pub const SPAWN_INTERVAL: f32 = 5.0;

    /// Distance kept between a fresh spawn and the walls
    pub const SPAWN_MARGIN: f32 = BALL_RADIUS * 2.0;

    /// Fixed simulation tick rate (Hz)
    pub const TICK_RATE: f32 = 60.0;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
