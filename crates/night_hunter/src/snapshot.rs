//! Read-only view of a session for whoever draws it

use scroll_engine::foundation::math::Vec2;
use scroll_engine::physics::Aabb;

use crate::actors::{ActorKind, EnemyId, Facing, Owner, ProjectileId, ProjectileKind};

/// Identifier of a drawable actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    /// The hero
    Hero,
    /// An enemy
    Enemy(EnemyId),
    /// A projectile
    Projectile(ProjectileId),
}

/// One actor as it should be drawn this frame
#[derive(Debug, Clone, PartialEq)]
pub struct ActorView {
    /// Stable identifier
    pub id: ActorId,
    /// What to draw
    pub kind: ActorKind,
    /// Projectile flavour, for projectiles
    pub projectile: Option<ProjectileKind>,
    /// Who fired it, for projectiles
    pub owner: Option<Owner>,
    /// Position in world space
    pub position: Vec2,
    /// Direction it faces
    pub facing: Facing,
    /// Set on the hero while a whip strike is active
    pub attacking: bool,
}

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The run is in progress
    Playing,
    /// The run ended
    GameOver {
        /// Score at the end of the run
        final_score: u64,
    },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    /// Hero first, then enemies, then projectiles
    pub actors: Vec<ActorView>,
    /// Ground segment boxes, left to right
    pub ground: Vec<Aabb>,
    /// Camera centre
    pub camera: Vec2,
    /// Horizontal offset per background layer
    pub parallax: Vec<f32>,
    /// Current score
    pub score: u64,
    /// Lives left
    pub lives: u32,
    /// Run status
    pub status: Status,
}

impl FrameView {
    /// The hero's view
    pub fn hero(&self) -> Option<&ActorView> {
        self.actors.iter().find(|actor| actor.kind == ActorKind::Hero)
    }

    /// Views of one kind of actor
    pub fn actors_of(&self, kind: ActorKind) -> impl Iterator<Item = &ActorView> {
        self.actors.iter().filter(move |actor| actor.kind == kind)
    }
}
