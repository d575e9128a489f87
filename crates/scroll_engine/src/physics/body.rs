//! Minimal 2D rigid-body state
//!
//! A body is a point with a box around it. Impulses are instantaneous
//! velocity changes (mass is implicitly 1), and resting contact is a simple
//! settle onto a surface rather than a solved constraint.

use crate::foundation::math::{clamp_lenient, Vec2};
use crate::physics::aabb::Aabb;

/// 2D body state owned by a single actor
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    /// Position of the body origin in world units
    pub position: Vec2,

    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Position at the start of the last integration step
    pub previous_position: Vec2,

    /// Half extents of the collision box
    pub half_extents: Vec2,

    /// Offset of the collision box centre from the body origin
    pub box_offset: Vec2,

    /// Whether the body moves at all
    pub dynamic: bool,

    /// Whether gravity accelerates the body
    pub affected_by_gravity: bool,
}

impl PhysicsBody {
    /// Create a dynamic body affected by gravity
    pub fn dynamic(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            previous_position: position,
            half_extents: Vec2::zeros(),
            box_offset: Vec2::zeros(),
            dynamic: true,
            affected_by_gravity: true,
        }
    }

    /// Create a moving body that ignores gravity (walkers, projectiles)
    pub fn kinematic(position: Vec2) -> Self {
        Self {
            affected_by_gravity: false,
            ..Self::dynamic(position)
        }
    }

    /// Create a body that never integrates (ground, walls)
    pub fn fixed(position: Vec2) -> Self {
        Self {
            dynamic: false,
            affected_by_gravity: false,
            ..Self::dynamic(position)
        }
    }

    /// Set the collision box (builder pattern)
    #[must_use]
    pub fn with_box(mut self, half_extents: Vec2, box_offset: Vec2) -> Self {
        self.half_extents = half_extents;
        self.box_offset = box_offset;
        self
    }

    /// Set the initial velocity (builder pattern)
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance velocity by gravity, then position by velocity
    ///
    /// Static bodies are left untouched.
    pub fn integrate(&mut self, delta_time: f32, gravity: Vec2) {
        if !self.dynamic {
            return;
        }

        self.previous_position = self.position;
        if self.affected_by_gravity {
            self.velocity += gravity * delta_time;
        }
        self.position += self.velocity * delta_time;
    }

    /// Apply an instantaneous velocity change
    pub fn apply_impulse(&mut self, delta_velocity: Vec2) {
        self.velocity += delta_velocity;
    }

    /// Stop all motion
    pub fn halt(&mut self) {
        self.velocity = Vec2::zeros();
    }

    /// Keep the body origin within `[min_x, max_x]`
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        self.position.x = clamp_lenient(self.position.x, min_x, max_x);
    }

    /// Move the body to `position` without any motion history
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.previous_position = position;
    }

    /// Current collision box
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position + self.box_offset, self.half_extents)
    }

    /// Collision box at the start of the last integration step
    pub fn previous_bounds(&self) -> Aabb {
        Aabb::new(self.previous_position + self.box_offset, self.half_extents)
    }

    /// Settle a falling body onto a surface at height `surface_y`
    ///
    /// When the body is descending (or at rest) and its box bottom has sunk
    /// below the surface, the box is lifted to sit exactly on it and the
    /// vertical velocity is cleared. Returns whether the body was settled.
    pub fn settle_on_surface(&mut self, surface_y: f32) -> bool {
        if !self.affected_by_gravity || self.velocity.y > 0.0 {
            return false;
        }

        let bottom = self.bounds().bottom();
        if bottom >= surface_y {
            return false;
        }

        self.position.y += surface_y - bottom;
        self.velocity.y = 0.0;
        true
    }
}
