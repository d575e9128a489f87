//! # Scroll Engine
//!
//! Headless building blocks for 2D side-scrolling games.
//!
//! ## Features
//!
//! - **Bodies**: minimal rigid-body state with gravity, impulses and resting contact
//! - **Collision Layers**: bitflag categories for routing contact outcomes
//! - **Broad Phase**: deterministic sweep-and-prune over axis-aligned boxes
//! - **Configuration**: TOML/RON config files through a single trait
//! - **Frame Timing**: wall-clock deltas with a safe first-frame fallback
//!
//! Nothing here renders. A game drives the pieces once per frame and hands
//! the resulting state to whatever presentation layer it has.
//!
//! ## Quick Start
//!
//! ```rust
//! use scroll_engine::prelude::*;
//!
//! let mut body = PhysicsBody::dynamic(Vec2::new(0.0, 100.0));
//! body.integrate(1.0 / 60.0, Vec2::new(0.0, -1800.0));
//! assert!(body.velocity.y < 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            math::Vec2,
            time::{Countdown, FrameClock},
        },
        physics::{Aabb, CollisionLayers, CollisionPair, Collider, PhysicsBody, SweepBroadPhase},
    };
}
