//! Physics module for 2D bodies and collision detection
//!
//! Provides a minimal body integrator, axis-aligned bounding boxes,
//! collision layer filtering and a sweep-and-prune broad phase. There is no
//! constraint solver: games decide what a contact means.

pub mod aabb;
pub mod body;
pub mod collision_layers;
pub mod collision_system;

pub use aabb::Aabb;
pub use body::PhysicsBody;
pub use collision_layers::CollisionLayers;
pub use collision_system::{Collider, CollisionPair, SweepBroadPhase};
