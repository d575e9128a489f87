//! Events raised during a tick for the presentation layer
//!
//! The simulation never waits on these; they are a per-tick record of what
//! happened so effects, popups and sounds can be played by whoever draws
//! the game.

use scroll_engine::foundation::math::Vec2;

use crate::actors::{EnemyId, Facing, ProjectileId};

/// What killed an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillCause {
    /// The hero landed on it
    Stomp,
    /// The whip hitbox reached it
    Whip,
    /// A thrown cross hit it
    Cross,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The hero left the ground with a jump
    Jumped,
    /// A whip strike began
    StrikeStarted {
        /// Direction of the strike
        facing: Facing,
    },
    /// A cross was thrown
    CrossThrown {
        /// The new projectile
        id: ProjectileId,
    },
    /// A new enemy was streamed in ahead of the hero
    EnemySpawned {
        /// The new enemy
        id: EnemyId,
        /// Its spawn x
        x: f32,
    },
    /// An enemy died
    EnemyKilled {
        /// The enemy that died
        id: EnemyId,
        /// Where it was
        position: Vec2,
        /// Points awarded
        reward: u32,
        /// What killed it
        cause: KillCause,
    },
    /// The hero lost a life
    HeroHit {
        /// Lives remaining
        lives_left: u32,
    },
    /// The hero fell below the world
    FellOffWorld,
    /// The world grew by one or more ground segments
    GroundExtended {
        /// New world width
        total_width: f32,
    },
    /// The last life was lost
    GameOver {
        /// Score at the end of the run
        final_score: u64,
    },
    /// A new run started
    Restarted,
}

/// Events collected since the last drain
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every recorded event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recorded events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
