//! Deterministic simulation module
//!
//! All world state and physics live here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod state;
pub mod tick;

pub use collision::{resolve_pairs, resolve_walls};
pub use frame::RotatingFrame;
pub use state::{Body, Color, SimState};
pub use tick::tick;
