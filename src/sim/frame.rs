//! The rotating container's reference frame
//!
//! All body dynamics happen in the container's local space, which turns
//! wall collision into an axis-aligned box check; only the rendering
//! projection needs the rotation.

use glam::Vec2;

use crate::wrap_angle;

/// Orientation and placement of the square container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingFrame {
    /// World-space center, fixed for the run
    pub center: Vec2,
    /// Current orientation (radians, kept in [0, 2π))
    pub angle: f32,
    /// Rotation speed (radians/second)
    pub angular_speed: f32,
    /// Half the side length of the square
    pub half_extent: f32,
}

impl RotatingFrame {
    pub fn new(center: Vec2, half_extent: f32, angular_speed: f32) -> Self {
        Self {
            center,
            angle: 0.0,
            angular_speed,
            half_extent,
        }
    }

    /// Advance the orientation by one time step
    pub fn advance(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.angular_speed * dt);
    }

    /// Map a local-space point into world space
    pub fn local_to_world(&self, p: Vec2) -> Vec2 {
        self.center + Vec2::from_angle(self.angle).rotate(p)
    }

    /// Map a world-space point into local space. Inverse of
    /// [`local_to_world`](Self::local_to_world); handy when external
    /// input (pointer position, say) must be expressed locally.
    pub fn world_to_local(&self, p: Vec2) -> Vec2 {
        Vec2::from_angle(-self.angle).rotate(p - self.center)
    }

    /// The container's corners in world space, counter-clockwise from
    /// the (-h, -h) corner. For drawing the outline.
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.half_extent;
        [
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ]
        .map(|corner| self.local_to_world(corner))
    }
}
