//! Whip strikes, thrown crosses, kills and damage
//!
//! The whip strike is an explicit phase machine advanced every tick. Its
//! hitbox is an ordinary projectile that follows the hero until the last
//! phase ends.

use scroll_engine::foundation::math::Vec2;
use scroll_engine::foundation::time::Countdown;

use crate::actors::{EnemyId, Projectile, ProjectileId, ProjectileKind};
use crate::config::{CombatConfig, GameConfig};
use crate::events::{EventQueue, GameEvent, KillCause};
use crate::state::{LifeLoss, Scoreboard};
use crate::world::WorldState;

/// Mutable state combat rules act on during a tick
pub struct CombatContext<'a> {
    /// Actors of the session
    pub world: &'a mut WorldState,
    /// Lives, score and state
    pub scoreboard: &'a mut Scoreboard,
    /// Events raised this tick
    pub events: &'a mut EventQueue,
    /// Tunables
    pub config: &'a GameConfig,
}

/// Phase of a whip strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikePhase {
    /// Arm raised
    WindUp,
    /// Whip extended
    Lash,
    /// Whip coming back
    Retract,
}

impl StrikePhase {
    fn duration(self, config: &CombatConfig) -> f32 {
        match self {
            Self::WindUp => config.whip_wind_up,
            Self::Lash => config.whip_lash,
            Self::Retract => config.whip_retract,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::WindUp => Some(Self::Lash),
            Self::Lash => Some(Self::Retract),
            Self::Retract => None,
        }
    }
}

/// An active whip strike
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeleeStrike {
    /// Current phase
    pub phase: StrikePhase,
    /// Time left in the current phase
    pub timer: Countdown,
    /// Hitbox projectile owned by this strike
    pub hitbox: ProjectileId,
}

/// Melee and ranged attack lifecycle
#[derive(Debug, Clone, Default)]
pub struct CombatSystem {
    strike: Option<MeleeStrike>,
}

impl CombatSystem {
    /// Create a combat system with no active strike
    pub fn new() -> Self {
        Self::default()
    }

    /// Active strike, if any
    pub const fn strike(&self) -> Option<&MeleeStrike> {
        self.strike.as_ref()
    }

    /// Drop any active strike without touching the world
    pub fn reset(&mut self) {
        self.strike = None;
    }

    /// Begin a whip strike in the hero's facing direction
    ///
    /// Ignored while a strike is already active or after game over.
    pub fn start_strike(&mut self, ctx: &mut CombatContext<'_>) -> bool {
        let hero = &ctx.world.hero;
        if hero.is_attacking || ctx.scoreboard.is_game_over() {
            return false;
        }

        let (origin, facing) = (hero.position(), hero.facing);
        let hitbox = ctx
            .world
            .spawn_projectile(Projectile::whip_hitbox(origin, facing, &ctx.config.combat));
        ctx.world.hero.is_attacking = true;
        self.strike = Some(MeleeStrike {
            phase: StrikePhase::WindUp,
            timer: Countdown::new(StrikePhase::WindUp.duration(&ctx.config.combat)),
            hitbox,
        });
        ctx.events.push(GameEvent::StrikeStarted { facing });
        true
    }

    /// Throw a cross in the hero's facing direction; ignored after game over
    pub fn throw_cross(ctx: &mut CombatContext<'_>) -> Option<ProjectileId> {
        if ctx.scoreboard.is_game_over() {
            return None;
        }

        let (origin, facing) = (ctx.world.hero.position(), ctx.world.hero.facing);
        let id = ctx
            .world
            .spawn_projectile(Projectile::cross(origin, facing, &ctx.config.combat));
        ctx.events.push(GameEvent::CrossThrown { id });
        Some(id)
    }

    /// Advance the strike phases and expire spent crosses
    pub fn advance(&mut self, delta_time: f32, ctx: &mut CombatContext<'_>) {
        if let Some(mut strike) = self.strike.take() {
            if Self::advance_strike(&mut strike, delta_time, &ctx.config.combat) {
                self.strike = Some(strike);
            } else {
                ctx.world.remove_projectile(strike.hitbox);
                ctx.world.hero.is_attacking = false;
            }
        }

        ctx.world.projectiles.retain(|_, projectile| match projectile.time_to_live.as_mut() {
            Some(ttl) => !ttl.tick(delta_time),
            None => true,
        });
    }

    /// Returns `false` once the last phase has run out
    fn advance_strike(strike: &mut MeleeStrike, delta_time: f32, config: &CombatConfig) -> bool {
        let mut left = delta_time;
        loop {
            let remaining = strike.timer.remaining();
            if left < remaining {
                strike.timer.tick(left);
                return true;
            }
            left -= remaining;
            match strike.phase.next() {
                Some(phase) => {
                    strike.phase = phase;
                    strike.timer = Countdown::new(phase.duration(config));
                }
                None => return false,
            }
        }
    }

    /// Kill an enemy and award the reward
    ///
    /// Returns `false` when the enemy is already gone, so resolving a stomp
    /// and a projectile hit on the same enemy in one tick pays out once.
    pub fn kill_enemy(ctx: &mut CombatContext<'_>, id: EnemyId, cause: KillCause) -> bool {
        let Some(enemy) = ctx.world.remove_enemy(id) else {
            return false;
        };

        let reward = ctx.config.combat.kill_reward;
        ctx.scoreboard.award(reward);
        log::debug!("Enemy {:?} killed by {:?} at x={:.1}", id, cause, enemy.position().x);
        ctx.events.push(GameEvent::EnemyKilled {
            id,
            position: enemy.position(),
            reward,
            cause,
        });
        true
    }

    /// Take a life from the hero and knock it back against its facing
    ///
    /// Ignored after game over. Returns whether a life was taken.
    pub fn hero_hit(ctx: &mut CombatContext<'_>) -> bool {
        let outcome = ctx.scoreboard.lose_life();
        if outcome == LifeLoss::Ignored {
            return false;
        }

        let physics = &ctx.config.physics;
        let hero = &mut ctx.world.hero;
        let away = -hero.facing.sign();
        hero.body.halt();
        hero.body.apply_impulse(Vec2::new(away * physics.knockback_x, physics.knockback_y));
        hero.on_ground = false;

        ctx.events.push(GameEvent::HeroHit {
            lives_left: ctx.scoreboard.lives(),
        });
        if outcome == LifeLoss::Ended {
            let final_score = ctx.scoreboard.score();
            log::info!("Game over with score {}", final_score);
            ctx.events.push(GameEvent::GameOver { final_score });
        } else {
            log::debug!("Hero hit, {} lives left", ctx.scoreboard.lives());
        }
        true
    }
}

/// Kill cause for a projectile of `kind`
pub const fn kill_cause(kind: ProjectileKind) -> KillCause {
    match kind {
        ProjectileKind::Cross => KillCause::Cross,
        ProjectileKind::WhipHitbox => KillCause::Whip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::Facing;
    use approx::assert_relative_eq;

    struct Fixture {
        world: WorldState,
        scoreboard: Scoreboard,
        events: EventQueue,
        config: GameConfig,
        combat: CombatSystem,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            Self {
                world: WorldState::new(&config),
                scoreboard: Scoreboard::new(config.hero.starting_lives),
                events: EventQueue::new(),
                combat: CombatSystem::new(),
                config,
            }
        }

        fn ctx(&mut self) -> (&mut CombatSystem, CombatContext<'_>) {
            (
                &mut self.combat,
                CombatContext {
                    world: &mut self.world,
                    scoreboard: &mut self.scoreboard,
                    events: &mut self.events,
                    config: &self.config,
                },
            )
        }
    }

    #[test]
    fn test_strike_is_not_reentrant() {
        let mut fx = Fixture::new();
        let (combat, mut ctx) = fx.ctx();
        assert!(combat.start_strike(&mut ctx));
        assert!(!combat.start_strike(&mut ctx));
        assert_eq!(fx.world.projectiles.len(), 1);
        assert!(fx.world.hero.is_attacking);
    }

    #[test]
    fn test_strike_runs_through_phases_then_despawns() {
        let mut fx = Fixture::new();
        let (combat, mut ctx) = fx.ctx();
        combat.start_strike(&mut ctx);

        combat.advance(0.1, &mut ctx);
        assert_eq!(combat.strike().map(|s| s.phase), Some(StrikePhase::Lash));
        combat.advance(0.12, &mut ctx);
        assert_eq!(combat.strike().map(|s| s.phase), Some(StrikePhase::Retract));
        combat.advance(0.1, &mut ctx);
        assert!(combat.strike().is_none());
        assert!(!fx.world.hero.is_attacking);
        assert!(fx.world.projectiles.is_empty());
    }

    #[test]
    fn test_new_strike_allowed_after_previous_ends() {
        let mut fx = Fixture::new();
        let (combat, mut ctx) = fx.ctx();
        combat.start_strike(&mut ctx);
        combat.advance(0.5, &mut ctx);
        assert!(combat.start_strike(&mut ctx));
    }

    #[test]
    fn test_cross_expires_after_lifetime() {
        let mut fx = Fixture::new();
        let (combat, mut ctx) = fx.ctx();
        let id = CombatSystem::throw_cross(&mut ctx).unwrap();
        combat.advance(1.9, &mut ctx);
        assert!(ctx.world.projectiles.contains_key(id));
        combat.advance(0.2, &mut ctx);
        assert!(!ctx.world.projectiles.contains_key(id));
    }

    #[test]
    fn test_no_attacks_after_game_over() {
        let mut fx = Fixture::new();
        for _ in 0..3 {
            let (_, mut ctx) = fx.ctx();
            CombatSystem::hero_hit(&mut ctx);
        }
        let (combat, mut ctx) = fx.ctx();
        assert!(!combat.start_strike(&mut ctx));
        assert!(CombatSystem::throw_cross(&mut ctx).is_none());
        assert!(fx.world.projectiles.is_empty());
    }

    #[test]
    fn test_kill_enemy_pays_once() {
        let mut fx = Fixture::new();
        let id = fx.world.enemies.keys().next().unwrap();
        let (_, mut ctx) = fx.ctx();
        assert!(CombatSystem::kill_enemy(&mut ctx, id, KillCause::Stomp));
        assert!(!CombatSystem::kill_enemy(&mut ctx, id, KillCause::Cross));
        assert_eq!(fx.scoreboard.score(), 100);
        assert_eq!(fx.world.enemies.len(), 14);
    }

    #[test]
    fn test_hero_hit_knocks_back_against_facing() {
        let mut fx = Fixture::new();
        fx.world.hero.facing = Facing::Right;
        fx.world.hero.body.velocity = Vec2::new(200.0, -30.0);
        let (_, mut ctx) = fx.ctx();
        assert!(CombatSystem::hero_hit(&mut ctx));
        assert_eq!(fx.scoreboard.lives(), 2);
        assert_relative_eq!(fx.world.hero.body.velocity.x, -160.0);
        assert_relative_eq!(fx.world.hero.body.velocity.y, 240.0);
    }

    #[test]
    fn test_third_hit_raises_game_over_once() {
        let mut fx = Fixture::new();
        for _ in 0..4 {
            let (_, mut ctx) = fx.ctx();
            CombatSystem::hero_hit(&mut ctx);
        }
        let game_overs = fx
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(fx.scoreboard.lives(), 0);
    }
}
