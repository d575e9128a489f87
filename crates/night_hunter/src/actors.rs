//! Actors: the hero, patrolling enemies, projectiles and ground segments
//!
//! Enemy patrol data is part of the enemy record itself. An enemy or
//! projectile is alive exactly as long as it is stored in the world; removal
//! is the death.

use scroll_engine::foundation::math::Vec2;
use scroll_engine::foundation::time::Countdown;
use scroll_engine::physics::{Aabb, CollisionLayers, PhysicsBody};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::config::{CombatConfig, EnemyConfig, HeroConfig};

new_key_type! {
    /// Stable identifier of an enemy; never reused within a world
    pub struct EnemyId;

    /// Stable identifier of a projectile; never reused within a world
    pub struct ProjectileId;
}

/// What an actor is, for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// The player character
    Hero,
    /// A patrolling enemy
    Enemy,
    /// A thrown cross or a whip hitbox
    Projectile,
}

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Facing towards negative x
    Left,
    /// Facing towards positive x
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    /// Body state
    pub body: PhysicsBody,

    /// Direction the hero looks and attacks in
    pub facing: Facing,

    /// Set by ground contact, cleared by jumping
    pub on_ground: bool,

    /// Set while a whip strike is active
    pub is_attacking: bool,
}

impl Hero {
    /// Collision layer of the hero
    pub const LAYER: CollisionLayers = CollisionLayers::PLAYER;

    /// What the hero touches
    pub const MASK: CollisionLayers = CollisionLayers::GROUND
        .union(CollisionLayers::ENEMY)
        .union(CollisionLayers::PLATFORM);

    /// Create the hero at its spawn point
    pub fn spawn(config: &HeroConfig, ground_height: f32) -> Self {
        let position = Self::spawn_position(config, ground_height);
        Self {
            body: PhysicsBody::dynamic(position).with_box(Vec2::new(config.half_width, config.half_height), Vec2::zeros()),
            facing: Facing::Right,
            on_ground: true,
            is_attacking: false,
        }
    }

    /// Where the hero starts a session
    pub fn spawn_position(config: &HeroConfig, ground_height: f32) -> Vec2 {
        Vec2::new(config.spawn_x, ground_height + config.spawn_height)
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Lowest point of the hero over the last step
    ///
    /// The higher of the bottom edge before and after integration, so a fast
    /// fall cannot skip past a narrow vertical window between two ticks.
    pub fn swept_bottom(&self) -> f32 {
        self.body.bounds().bottom().max(self.body.previous_bounds().bottom())
    }
}

/// Patrol direction of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatrolState {
    /// Walking towards `patrol_start`
    MovingLeft,
    /// Walking towards `patrol_end`
    MovingRight,
}

impl PatrolState {
    /// `-1.0` when moving left, `1.0` when moving right
    pub const fn direction(self) -> f32 {
        match self {
            Self::MovingLeft => -1.0,
            Self::MovingRight => 1.0,
        }
    }

    /// Facing matching the walking direction
    pub const fn facing(self) -> Facing {
        match self {
            Self::MovingLeft => Facing::Left,
            Self::MovingRight => Facing::Right,
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Body state; enemies walk and ignore gravity
    pub body: PhysicsBody,

    /// Left patrol bound
    pub patrol_start: f32,

    /// Right patrol bound
    pub patrol_end: f32,

    /// Current patrol direction
    pub state: PatrolState,

    /// Height of the stompable top above the origin
    pub top_offset: f32,
}

impl Enemy {
    /// Collision layer of enemies
    pub const LAYER: CollisionLayers = CollisionLayers::ENEMY;

    /// What enemies touch
    pub const MASK: CollisionLayers = CollisionLayers::PLAYER.union(CollisionLayers::PROJECTILE);

    /// Create an enemy centred on `spawn_x`, walking left
    pub fn spawn(spawn_x: f32, config: &EnemyConfig, ground_height: f32) -> Self {
        let half_width = config.patrol_half_width.max(0.0);
        let position = Vec2::new(spawn_x, ground_height + config.walk_height);
        Self {
            body: PhysicsBody::kinematic(position).with_box(
                Vec2::new(config.half_width, config.half_height),
                Vec2::new(0.0, config.box_offset_y),
            ),
            patrol_start: spawn_x - half_width,
            patrol_end: spawn_x + half_width,
            state: PatrolState::MovingLeft,
            top_offset: config.top_offset,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Height a landing hero has to clear to count as a stomp
    pub fn top(&self) -> f32 {
        self.body.position.y + self.top_offset
    }
}

/// What a projectile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Thrown sub-weapon; spent on the first enemy it hits
    Cross,
    /// Melee hitbox at the whip tip; lasts for the whole strike
    WhipHitbox,
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// The player character
    Hero,
}

/// A thrown cross or a whip hitbox
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Body state; projectiles ignore gravity
    pub body: PhysicsBody,

    /// What this projectile is
    pub kind: ProjectileKind,

    /// Who fired it
    pub owner: Owner,

    /// Remaining life for self-expiring projectiles; a whip hitbox lives as
    /// long as its strike instead
    pub time_to_live: Option<Countdown>,

    /// Direction it was fired in
    pub facing: Facing,
}

impl Projectile {
    /// Collision layer of projectiles
    pub const LAYER: CollisionLayers = CollisionLayers::PROJECTILE;

    /// What projectiles touch
    pub const MASK: CollisionLayers = CollisionLayers::ENEMY;

    /// A cross thrown from `origin` in the `facing` direction
    pub fn cross(origin: Vec2, facing: Facing, config: &CombatConfig) -> Self {
        let direction = facing.sign();
        let position = origin + Vec2::new(direction * config.cross_offset_x, config.cross_offset_y);
        Self {
            body: PhysicsBody::kinematic(position)
                .with_box(Vec2::new(config.cross_half_size, config.cross_half_size), Vec2::zeros())
                .with_velocity(Vec2::new(direction * config.cross_speed, 0.0)),
            kind: ProjectileKind::Cross,
            owner: Owner::Hero,
            time_to_live: Some(Countdown::new(config.cross_lifetime)),
            facing,
        }
    }

    /// A whip hitbox in front of a hero standing at `origin`
    pub fn whip_hitbox(origin: Vec2, facing: Facing, config: &CombatConfig) -> Self {
        Self {
            body: PhysicsBody::fixed(Self::whip_position(origin, facing, config))
                .with_box(Vec2::new(config.whip_half_width, config.whip_half_height), Vec2::zeros()),
            kind: ProjectileKind::WhipHitbox,
            owner: Owner::Hero,
            time_to_live: None,
            facing,
        }
    }

    /// Where the whip hitbox sits for a hero at `origin`
    pub fn whip_position(origin: Vec2, facing: Facing, config: &CombatConfig) -> Vec2 {
        origin + Vec2::new(facing.sign() * config.whip_reach, config.whip_height)
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.body.position
    }
}

/// One fixed piece of ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSegment {
    /// Solid box from the world floor up to the ground surface
    pub bounds: Aabb,
}

impl GroundSegment {
    /// Collision layer of ground
    pub const LAYER: CollisionLayers = CollisionLayers::GROUND;

    /// What ground touches
    pub const MASK: CollisionLayers = CollisionLayers::PLAYER;

    /// Segment covering `[start_x, start_x + width)` up to `height`
    pub fn new(start_x: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::from_min_max(Vec2::new(start_x, 0.0), Vec2::new(start_x + width, height)),
        }
    }

    /// Left edge
    pub fn start_x(&self) -> f32 {
        self.bounds.left()
    }

    /// Right edge (exclusive)
    pub fn end_x(&self) -> f32 {
        self.bounds.right()
    }

    /// Height of the walkable surface
    pub fn surface_y(&self) -> f32 {
        self.bounds.top()
    }
}
