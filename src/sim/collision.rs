//! Wall and pairwise collision resolution
//!
//! Everything operates in the container's local space, where the walls
//! form the axis-aligned box ±half_extent.

use glam::Vec2;

use super::state::Body;

/// Normal used when two centers coincide exactly and no direction can be
/// derived from their displacement.
const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Resolve a body's penetration of the four container walls.
///
/// Each axis is handled independently: the position is clamped to
/// ±(half_extent - radius) and the velocity component is forced to point
/// back inside. Speed magnitude is preserved, and a body already receding
/// from the wall it touches keeps its velocity. Corner contacts resolve
/// correctly because the axes never interact.
pub fn resolve_walls(body: &mut Body, half_extent: f32) {
    let bound = half_extent - body.radius;

    if body.pos.x > bound {
        body.pos.x = bound;
        body.vel.x = -body.vel.x.abs();
    } else if body.pos.x < -bound {
        body.pos.x = -bound;
        body.vel.x = body.vel.x.abs();
    }

    if body.pos.y > bound {
        body.pos.y = bound;
        body.vel.y = -body.vel.y.abs();
    } else if body.pos.y < -bound {
        body.pos.y = -bound;
        body.vel.y = body.vel.y.abs();
    }
}

/// Resolve overlap between every unordered pair of bodies, each pair
/// visited once in ascending index order.
///
/// Overlapping pairs are pushed half the overlap apart each, then an
/// equal-mass elastic impulse exchanges the normal velocity components.
/// The impulse only applies while the pair is still approaching, so a
/// pair that merely overlaps on the way out is separated without a
/// second velocity exchange. One pass per tick; a small residual overlap
/// can survive until the next pass.
pub fn resolve_pairs(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let d = a.pos - b.pos;
            let dist = d.length();
            let min_dist = a.radius + b.radius;
            if dist >= min_dist {
                continue;
            }

            let normal = if dist > 0.0 { d / dist } else { FALLBACK_NORMAL };

            // Positional correction: half the overlap each, so the pair
            // does not keep sinking across ticks.
            let correction = (min_dist - dist) / 2.0;
            a.pos += normal * correction;
            b.pos -= normal * correction;

            let v_rel = (a.vel - b.vel).dot(normal);
            if v_rel < 0.0 {
                let impulse = -v_rel;
                a.vel += normal * impulse;
                b.vel -= normal * impulse;
            }
        }
    }
}
