//! Host-facing configuration
//!
//! The simulation core assumes a validated [`Config`]; the embedding
//! application is expected to call [`Config::validate`] before
//! constructing a `SimState`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Everything the host may vary between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas dimensions in world units
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Side length of the square container
    pub square_size: f32,
    /// Radius of every spawned ball
    pub ball_radius: f32,
    /// Spawn speed range (units/second)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Container rotation speed (radians/second)
    pub rotation_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Distance kept between a fresh spawn and the walls
    pub spawn_margin: f32,
    /// Fixed tick rate the host should drive at (Hz)
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            square_size: SQUARE_SIZE,
            ball_radius: BALL_RADIUS,
            speed_min: BALL_SPEED_MIN,
            speed_max: BALL_SPEED_MAX,
            rotation_speed: ROTATION_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
            tick_rate: TICK_RATE,
        }
    }
}

impl Config {
    /// Half the container side length, the bound of local space
    pub fn half_extent(&self) -> f32 {
        self.square_size / 2.0
    }

    /// Parse a configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reject configurations the simulation cannot run with.
    ///
    /// The core never re-checks these; a `SimState` built from an invalid
    /// config is a precondition violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_size <= 0.0
            || self.square_size > self.canvas_width.min(self.canvas_height)
        {
            return Err(ConfigError::ContainerSize);
        }
        if self.ball_radius <= 0.0 || self.ball_radius >= self.half_extent() {
            return Err(ConfigError::BallRadius);
        }
        if self.speed_min <= 0.0 || self.speed_max < self.speed_min {
            return Err(ConfigError::SpeedRange);
        }
        if self.spawn_interval <= 0.0 {
            return Err(ConfigError::SpawnInterval);
        }
        if self.spawn_margin >= self.half_extent() {
            return Err(ConfigError::SpawnMargin);
        }
        if self.tick_rate <= 0.0 {
            return Err(ConfigError::TickRate);
        }
        Ok(())
    }
}

/// A configuration value the simulation cannot run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ContainerSize,
    BallRadius,
    SpeedRange,
    SpawnInterval,
    SpawnMargin,
    TickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ContainerSize => {
                "container side must be positive and fit inside the canvas"
            }
            ConfigError::BallRadius => "ball radius must be positive and fit inside the container",
            ConfigError::SpeedRange => "spawn speed range must be positive and non-inverted",
            ConfigError::SpawnInterval => "spawn interval must be positive",
            ConfigError::SpawnMargin => "spawn margin leaves no room inside the container",
            ConfigError::TickRate => "tick rate must be positive",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ConfigError {}
