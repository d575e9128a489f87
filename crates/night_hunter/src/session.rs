//! Game session: owns one run of the game and drives it frame by frame
//!
//! A session is an explicit value. Input handlers only record intent; all
//! simulation happens in [`GameSession::update`], which runs the per-tick
//! pipeline in a fixed order:
//!
//! 1. jump and attack intents
//! 2. integration of every moving body
//! 3. contact resolution
//! 4. strike phases and projectile lifetimes
//! 5. enemy patrols
//! 6. level streaming
//! 7. camera follow
//! 8. fall-off-world check

use rand::rngs::StdRng;
use rand::SeedableRng;
use scroll_engine::config::ConfigError;
use scroll_engine::foundation::math::Vec2;
use scroll_engine::foundation::time::FrameClock;

use crate::actors::{ActorKind, Facing, Hero};
use crate::camera::Camera;
use crate::collision::CollisionResolver;
use crate::combat::{CombatContext, CombatSystem};
use crate::config::GameConfig;
use crate::enemy_ai;
use crate::events::{EventQueue, GameEvent};
use crate::input::InputState;
use crate::level::LevelStreamer;
use crate::snapshot::{ActorId, ActorView, FrameView, Status};
use crate::state::{Scoreboard, SessionState};
use crate::world::WorldState;

/// One run of the game
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    world: WorldState,
    camera: Camera,
    scoreboard: Scoreboard,
    input: InputState,
    combat: CombatSystem,
    resolver: CollisionResolver,
    streamer: LevelStreamer,
    rng: StdRng,
    clock: FrameClock,
    events: EventQueue,
}

impl GameSession {
    /// Start a session with a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Start a session with the default tunables
    pub fn with_defaults() -> Self {
        Self::build(GameConfig::default())
    }

    fn build(config: GameConfig) -> Self {
        let rng = match config.level.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = WorldState::new(&config);
        log::info!(
            "Session started: world width {:.0}, {} enemies",
            world.total_width(),
            world.enemies.len()
        );

        Self {
            camera: Camera::new(&config.camera),
            scoreboard: Scoreboard::new(config.hero.starting_lives),
            input: InputState::new(),
            combat: CombatSystem::new(),
            resolver: CollisionResolver::new(),
            streamer: LevelStreamer::new(&config.level),
            rng,
            clock: FrameClock::new(),
            events: EventQueue::new(),
            world,
            config,
        }
    }

    // Input
    //
    // After game over every handler but `on_restart` is ignored.

    /// Left pressed: hold left and face left
    pub fn on_press_left(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.set_left(true);
        self.world.hero.facing = Facing::Left;
    }

    /// Left released
    pub fn on_release_left(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.set_left(false);
    }

    /// Right pressed: hold right and face right
    pub fn on_press_right(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.set_right(true);
        self.world.hero.facing = Facing::Right;
    }

    /// Right released
    pub fn on_release_right(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.set_right(false);
    }

    /// All touches cancelled: release both directions
    pub fn on_cancel_all(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.release_directions();
    }

    /// Jump pressed; acted on by the next tick
    pub fn on_jump(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.request_jump();
    }

    /// Attack pressed; the next tick starts a whip strike and throws a cross
    pub fn on_attack(&mut self) {
        if self.scoreboard.is_game_over() {
            return;
        }
        self.input.request_attack();
    }

    /// Restart pressed; only honoured after game over
    pub fn on_restart(&mut self) {
        if self.scoreboard.is_game_over() {
            self.restart();
        }
    }

    // Simulation

    /// Advance by the wall-clock time since the previous tick
    ///
    /// The first tick of a run uses a fixed fallback delta.
    pub fn tick(&mut self, timestamp: f64) {
        let delta_time = self.clock.advance(timestamp);
        self.update(delta_time);
    }

    /// Advance the simulation by `delta_time` seconds; a no-op after game over
    pub fn update(&mut self, delta_time: f32) {
        if self.scoreboard.is_game_over() {
            return;
        }

        {
            let mut ctx = CombatContext {
                world: &mut self.world,
                scoreboard: &mut self.scoreboard,
                events: &mut self.events,
                config: &self.config,
            };

            if self.input.take_jump() {
                Self::jump(&mut ctx);
            }
            if self.input.take_attack() {
                self.combat.start_strike(&mut ctx);
                CombatSystem::throw_cross(&mut ctx);
            }

            ctx.world.integrate(delta_time, ctx.config, self.input.held_direction());
            self.resolver.resolve(&mut ctx);
            self.combat.advance(delta_time, &mut ctx);
        }

        enemy_ai::update_patrols(&mut self.world.enemies, self.config.enemy.patrol_speed);
        self.streamer
            .update(&mut self.world, &self.config.enemy, &mut self.rng, &mut self.events);
        self.camera
            .update(self.world.hero.position().x, self.world.total_width());
        self.check_fall_off_world();
    }

    fn jump(ctx: &mut CombatContext<'_>) {
        let hero = &mut ctx.world.hero;
        if !hero.on_ground || ctx.scoreboard.is_game_over() {
            return;
        }

        hero.on_ground = false;
        hero.body.velocity.y = 0.0;
        hero.body.apply_impulse(Vec2::new(0.0, ctx.config.physics.jump_speed));
        ctx.events.push(GameEvent::Jumped);
    }

    fn check_fall_off_world(&mut self) {
        if self.world.hero.position().y >= self.config.hero.fall_threshold_y {
            return;
        }

        self.events.push(GameEvent::FellOffWorld);
        let mut ctx = CombatContext {
            world: &mut self.world,
            scoreboard: &mut self.scoreboard,
            events: &mut self.events,
            config: &self.config,
        };
        CombatSystem::hero_hit(&mut ctx);

        if !self.scoreboard.is_game_over() {
            let respawn_y = self.world.ground_height() + self.config.hero.respawn_height;
            let body = &mut self.world.hero.body;
            body.teleport(Vec2::new(body.position.x, respawn_y));
            body.halt();
        }
    }

    /// Start a new run in this session
    fn restart(&mut self) {
        self.world = WorldState::new(&self.config);
        self.camera = Camera::new(&self.config.camera);
        self.scoreboard.reset(self.config.hero.starting_lives);
        self.input.clear();
        self.combat.reset();
        self.resolver.reset();
        self.clock.reset();
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    // Output

    /// Everything a presentation layer needs to draw the current frame
    pub fn snapshot(&self) -> FrameView {
        let hero = &self.world.hero;
        let mut actors = Vec::with_capacity(1 + self.world.enemies.len() + self.world.projectiles.len());
        actors.push(ActorView {
            id: ActorId::Hero,
            kind: ActorKind::Hero,
            projectile: None,
            owner: None,
            position: hero.position(),
            facing: hero.facing,
            attacking: hero.is_attacking,
        });
        actors.extend(self.world.enemies.iter().map(|(id, enemy)| ActorView {
            id: ActorId::Enemy(id),
            kind: ActorKind::Enemy,
            projectile: None,
            owner: None,
            position: enemy.position(),
            facing: enemy.state.facing(),
            attacking: false,
        }));
        actors.extend(self.world.projectiles.iter().map(|(id, projectile)| ActorView {
            id: ActorId::Projectile(id),
            kind: ActorKind::Projectile,
            projectile: Some(projectile.kind),
            owner: Some(projectile.owner),
            position: projectile.position(),
            facing: projectile.facing,
            attacking: false,
        }));

        let status = match self.scoreboard.state() {
            SessionState::Playing => Status::Playing,
            SessionState::GameOver => Status::GameOver {
                final_score: self.scoreboard.score(),
            },
        };

        FrameView {
            actors,
            ground: self.world.ground().iter().map(|segment| segment.bounds).collect(),
            camera: self.camera.position,
            parallax: self.camera.parallax_offsets(&self.config.camera.parallax_factors),
            score: self.scoreboard.score(),
            lives: self.scoreboard.lives(),
            status,
        }
    }

    /// Events raised since the previous drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Tunables this session runs with
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Actors and ground
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// The hero
    pub const fn hero(&self) -> &Hero {
        &self.world.hero
    }

    /// Camera
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Playing or game over
    pub const fn state(&self) -> SessionState {
        self.scoreboard.state()
    }

    /// Current score
    pub const fn score(&self) -> u64 {
        self.scoreboard.score()
    }

    /// Lives left
    pub const fn lives(&self) -> u32 {
        self.scoreboard.lives()
    }

    /// Active whip strike state
    pub const fn combat(&self) -> &CombatSystem {
        &self.combat
    }

    /// Frame timing of the current run
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }
}
