//! # Night Hunter
//!
//! Simulation core of a side-scrolling action game: a whip-wielding hero
//! runs right through a streamed level, stomping, lashing and throwing
//! crosses at patrolling enemies.
//!
//! The crate renders nothing. A presentation layer forwards input to a
//! [`GameSession`](session::GameSession), calls `tick` once per frame and
//! draws the [`FrameView`](snapshot::FrameView) it gets back, playing
//! effects from the drained [`GameEvent`](events::GameEvent)s.
//!
//! ```rust
//! use night_hunter::prelude::*;
//!
//! let mut session = GameSession::with_defaults();
//! session.on_press_right();
//! for frame in 0..120 {
//!     session.tick(f64::from(frame) / 60.0);
//! }
//! assert!(session.snapshot().camera.x >= 400.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod actors;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod config;
pub mod enemy_ai;
pub mod events;
pub mod input;
pub mod level;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod world;

#[cfg(test)]
mod tests;

/// Common imports for embedding the game
pub mod prelude {
    pub use crate::{
        actors::{ActorKind, EnemyId, Facing, ProjectileId, ProjectileKind},
        config::GameConfig,
        events::{GameEvent, KillCause},
        session::GameSession,
        snapshot::{ActorId, ActorView, FrameView, Status},
        state::SessionState,
    };
    pub use scroll_engine::config::{Config, ConfigError};
}
