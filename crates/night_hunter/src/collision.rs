//! Contact resolution
//!
//! Every tick the live actors are fed to a sweep broad phase and each
//! resulting pair is routed by the union of its two collision layers.
//! Ground contact is level-triggered and refreshed every tick. Enemy
//! contacts only act on the tick they begin, so an overlap that lasts
//! several ticks hurts or kills once.

use std::collections::HashSet;

use scroll_engine::foundation::math::Vec2;
use scroll_engine::physics::{Collider, CollisionLayers, CollisionPair, SweepBroadPhase};

use crate::actors::{Enemy, EnemyId, GroundSegment, Hero, Projectile, ProjectileId, ProjectileKind};
use crate::combat::{kill_cause, CombatContext, CombatSystem};
use crate::events::KillCause;

/// Identifies the owner of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorHandle {
    /// The hero
    Hero,
    /// Ground segment by index
    Ground(usize),
    /// A live enemy
    Enemy(EnemyId),
    /// A live projectile
    Projectile(ProjectileId),
}

/// Outcome rule chosen for a contact pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRule {
    /// Hero standing on ground or a platform
    HeroGround,
    /// Projectile reaching an enemy
    ProjectileEnemy {
        /// The projectile
        projectile: ProjectileId,
        /// The enemy
        enemy: EnemyId,
    },
    /// Hero touching an enemy: a stomp or damage
    HeroEnemy(EnemyId),
    /// Nothing to do
    Unhandled,
}

impl ContactRule {
    /// Route a pair by the union of its layers
    pub fn classify(pair: &CollisionPair<ActorHandle>) -> Self {
        let layers = pair.layers();
        let handles = [pair.a, pair.b];

        if layers == CollisionLayers::PLAYER | CollisionLayers::GROUND
            || layers == CollisionLayers::PLAYER | CollisionLayers::PLATFORM
        {
            Self::HeroGround
        } else if layers == CollisionLayers::PROJECTILE | CollisionLayers::ENEMY {
            let projectile = handles.iter().find_map(|handle| match handle {
                ActorHandle::Projectile(id) => Some(*id),
                _ => None,
            });
            match (projectile, enemy_in(&handles)) {
                (Some(projectile), Some(enemy)) => Self::ProjectileEnemy { projectile, enemy },
                _ => Self::Unhandled,
            }
        } else if layers == CollisionLayers::PLAYER | CollisionLayers::ENEMY {
            enemy_in(&handles).map_or(Self::Unhandled, Self::HeroEnemy)
        } else {
            Self::Unhandled
        }
    }

    /// Whether the rule acts only on the first tick of a contact
    pub const fn on_begin_only(self) -> bool {
        matches!(self, Self::ProjectileEnemy { .. } | Self::HeroEnemy(_))
    }
}

fn enemy_in(handles: &[ActorHandle]) -> Option<EnemyId> {
    handles.iter().find_map(|handle| match handle {
        ActorHandle::Enemy(id) => Some(*id),
        _ => None,
    })
}

/// Whether the hero lands on the enemy rather than running into it
///
/// The hero's lowest point over the last step must be above the enemy top
/// less `tolerance`, and the hero must be falling. Standing still (vy == 0)
/// is not a stomp.
pub fn is_stomp(hero: &Hero, enemy: &Enemy, tolerance: f32) -> bool {
    hero.swept_bottom() > enemy.top() - tolerance && hero.body.velocity.y < 0.0
}

/// Per-tick contact detection and resolution
#[derive(Debug, Default)]
pub struct CollisionResolver {
    broad_phase: SweepBroadPhase<ActorHandle>,
    contacts: Vec<CollisionPair<ActorHandle>>,
    current: HashSet<(ActorHandle, ActorHandle)>,
    previous: HashSet<(ActorHandle, ActorHandle)>,
}

impl CollisionResolver {
    /// Create a resolver with no contact history
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every contact seen so far
    pub fn reset(&mut self) {
        self.broad_phase.clear();
        self.contacts.clear();
        self.current.clear();
        self.previous.clear();
    }

    /// Find this tick's contacts and apply their rules
    ///
    /// Rules run in broad-phase order. A pair whose enemy or projectile
    /// already died earlier in the tick is skipped, and nothing further is
    /// resolved once the session has ended.
    pub fn resolve(&mut self, ctx: &mut CombatContext<'_>) {
        self.gather(ctx);
        self.contacts.clear();
        self.contacts.extend_from_slice(self.broad_phase.detect());

        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();
        self.current.extend(self.contacts.iter().map(|pair| (pair.a, pair.b)));

        ctx.world.hero.on_ground = false;
        for pair in &self.contacts {
            if ctx.scoreboard.is_game_over() {
                break;
            }

            let rule = ContactRule::classify(pair);
            if rule.on_begin_only() && self.previous.contains(&(pair.a, pair.b)) {
                continue;
            }

            match rule {
                ContactRule::HeroGround => ctx.world.hero.on_ground = true,
                ContactRule::ProjectileEnemy { projectile, enemy } => {
                    Self::projectile_hits_enemy(ctx, projectile, enemy);
                }
                ContactRule::HeroEnemy(enemy) => Self::hero_meets_enemy(ctx, enemy),
                ContactRule::Unhandled => {}
            }
        }
        log::trace!("Resolved {} contacts", self.contacts.len());
    }

    /// Number of contacts found by the last [`resolve`](Self::resolve)
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    fn gather(&mut self, ctx: &CombatContext<'_>) {
        let world = &*ctx.world;
        self.broad_phase.clear();

        let hero_bounds = world.hero.body.bounds();
        self.broad_phase
            .insert(Collider::new(ActorHandle::Hero, hero_bounds, Hero::LAYER, Hero::MASK));

        for index in world.ground_range(hero_bounds.left(), hero_bounds.right()) {
            let segment = &world.ground()[index];
            self.broad_phase.insert(Collider::new(
                ActorHandle::Ground(index),
                segment.bounds,
                GroundSegment::LAYER,
                GroundSegment::MASK,
            ));
        }

        for (id, enemy) in &world.enemies {
            self.broad_phase.insert(Collider::new(
                ActorHandle::Enemy(id),
                enemy.body.bounds(),
                Enemy::LAYER,
                Enemy::MASK,
            ));
        }

        for (id, projectile) in &world.projectiles {
            self.broad_phase.insert(Collider::new(
                ActorHandle::Projectile(id),
                projectile.body.bounds(),
                Projectile::LAYER,
                Projectile::MASK,
            ));
        }
    }

    fn projectile_hits_enemy(ctx: &mut CombatContext<'_>, projectile: ProjectileId, enemy: EnemyId) {
        let Some(kind) = ctx.world.projectiles.get(projectile).map(|p| p.kind) else {
            return;
        };
        if !ctx.world.enemies.contains_key(enemy) {
            return;
        }

        CombatSystem::kill_enemy(ctx, enemy, kill_cause(kind));
        if kind == ProjectileKind::Cross {
            ctx.world.remove_projectile(projectile);
        }
    }

    fn hero_meets_enemy(ctx: &mut CombatContext<'_>, id: EnemyId) {
        let Some(enemy) = ctx.world.enemies.get(id) else {
            return;
        };

        if is_stomp(&ctx.world.hero, enemy, ctx.config.combat.stomp_tolerance) {
            if CombatSystem::kill_enemy(ctx, id, KillCause::Stomp) {
                let bounce = ctx.config.physics.stomp_bounce_speed;
                let body = &mut ctx.world.hero.body;
                body.velocity.y = 0.0;
                body.apply_impulse(Vec2::new(0.0, bounce));
            }
        } else {
            CombatSystem::hero_hit(ctx);
        }
    }
}
