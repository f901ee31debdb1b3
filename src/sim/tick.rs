//! Fixed-size simulation step
//!
//! Advances the whole world by one time delta: container rotation, Euler
//! integration, wall resolution, pairwise resolution, then the spawn
//! timer.

use super::collision::{resolve_pairs, resolve_walls};
use super::state::SimState;

/// Advance the world by one time step.
///
/// `dt` comes from the host: a measured frame delta, or a fixed value for
/// offline runs. Identical dt sequences and seeds produce identical
/// worlds.
pub fn tick(state: &mut SimState, dt: f32) {
    state.time_ticks += 1;

    state.frame.advance(dt);

    for body in &mut state.bodies {
        body.pos += body.vel * dt;
    }

    let half_extent = state.frame.half_extent;
    for body in &mut state.bodies {
        resolve_walls(body, half_extent);
    }

    resolve_pairs(&mut state.bodies);

    state.spawn_timer += dt;
    if state.spawn_timer >= state.config.spawn_interval {
        state.spawn_timer = 0.0;
        state.spawn_body();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::{Body, Color};
    use glam::Vec2;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// A 100-unit container with spawning effectively disabled
    fn quiet_config() -> Config {
        Config {
            square_size: 100.0,
            spawn_interval: 1e9,
            ..Config::default()
        }
    }

    fn push_body(state: &mut SimState, pos: Vec2, vel: Vec2) {
        let radius = state.config.ball_radius;
        state.bodies.push(Body {
            pos,
            vel,
            radius,
            color: WHITE,
        });
    }

    #[test]
    fn five_one_second_ticks_spawn_exactly_one_body() {
        let config = Config {
            spawn_interval: 5.0,
            ..Config::default()
        };
        let mut state = SimState::new(config, 1);

        for _ in 0..4 {
            tick(&mut state, 1.0);
        }
        assert_eq!(state.bodies.len(), 0);

        // Accumulator reaches the threshold exactly on the 5th call
        tick(&mut state, 1.0);
        assert_eq!(state.bodies.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn thirty_six_ticks_at_ten_degrees_return_to_zero() {
        let config = Config {
            rotation_speed: PI / 18.0,
            spawn_interval: 1e9,
            ..Config::default()
        };
        let mut state = SimState::new(config, 1);
        for _ in 0..36 {
            tick(&mut state, 1.0);
        }
        let d = state.frame.angle.rem_euclid(TAU);
        assert!(d.min(TAU - d) < 1e-3);
    }

    #[test]
    fn fast_body_clamps_at_the_wall_with_flipped_velocity() {
        let mut state = SimState::new(quiet_config(), 1);
        push_body(&mut state, Vec2::ZERO, Vec2::new(300.0, 0.0));

        tick(&mut state, 0.2);

        // half_extent 50, radius 10: the bound is x = 40
        let body = &state.bodies[0];
        assert_eq!(body.pos.x, 40.0);
        assert_eq!(body.vel.x, -300.0);
        assert_eq!(body.pos.y, 0.0);
    }

    #[test]
    fn overlapping_pair_resolves_within_one_tick() {
        let mut state = SimState::new(quiet_config(), 1);
        push_body(&mut state, Vec2::new(-5.0, 0.0), Vec2::new(50.0, 0.0));
        push_body(&mut state, Vec2::new(5.0, 0.0), Vec2::new(-50.0, 0.0));

        // dt of zero isolates the resolution pass from integration
        tick(&mut state, 0.0);

        let gap = (state.bodies[1].pos - state.bodies[0].pos).length();
        assert!((gap - 20.0).abs() < 1e-3);
        assert!(state.bodies[0].vel.x < 0.0);
        assert!(state.bodies[1].vel.x > 0.0);
    }

    #[test]
    fn same_seed_and_dt_sequence_reproduce_the_world() {
        let mut a = SimState::new(Config::default(), 1234);
        let mut b = SimState::new(Config::default(), 1234);
        for _ in 0..600 {
            tick(&mut a, 1.0 / 60.0);
            tick(&mut b, 1.0 / 60.0);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.bodies, b.bodies);
    }

    #[test]
    fn long_run_keeps_every_body_near_the_box() {
        // Default config spawns a body every 5 simulated seconds
        let mut state = SimState::new(Config::default(), 2024);
        let bound = state.frame.half_extent - state.config.ball_radius;

        for _ in 0..3600 {
            tick(&mut state, 1.0 / 60.0);
        }
        assert!(!state.bodies.is_empty());

        // Pair correction runs after wall resolution, so allow up to one
        // radius of excursion for bodies shoved while touching a wall.
        let slack = state.config.ball_radius;
        for body in &state.bodies {
            assert!(body.pos.x.abs() <= bound + slack);
            assert!(body.pos.y.abs() <= bound + slack);
        }
    }

    proptest! {
        #[test]
        fn lone_body_stays_inside_the_walls(
            x in -40.0f32..=40.0,
            y in -40.0f32..=40.0,
            vx in -500.0f32..=500.0,
            vy in -500.0f32..=500.0,
        ) {
            let mut state = SimState::new(quiet_config(), 5);
            push_body(&mut state, Vec2::new(x, y), Vec2::new(vx, vy));

            for _ in 0..120 {
                tick(&mut state, 1.0 / 60.0);
            }

            let bound = state.frame.half_extent - state.config.ball_radius;
            let body = &state.bodies[0];
            prop_assert!(body.pos.x.abs() <= bound + 1e-3);
            prop_assert!(body.pos.y.abs() <= bound + 1e-3);
        }

        #[test]
        fn wall_bounces_never_change_speed(
            x in -40.0f32..=40.0,
            y in -40.0f32..=40.0,
            vx in -500.0f32..=500.0,
            vy in -500.0f32..=500.0,
        ) {
            let mut state = SimState::new(quiet_config(), 5);
            push_body(&mut state, Vec2::new(x, y), Vec2::new(vx, vy));
            let speed = state.bodies[0].vel.length();

            for _ in 0..120 {
                tick(&mut state, 1.0 / 60.0);
            }

            prop_assert!((state.bodies[0].vel.length() - speed).abs() < 1e-2);
        }
    }
}
