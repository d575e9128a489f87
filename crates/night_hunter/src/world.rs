//! World state: every actor of a session and the ground under them

use scroll_engine::foundation::math::Vec2;
use slotmap::SlotMap;

use crate::actors::{Enemy, EnemyId, GroundSegment, Hero, Projectile, ProjectileId, ProjectileKind};
use crate::config::{EnemyConfig, GameConfig};

/// Owns every actor of a session
#[derive(Debug, Clone)]
pub struct WorldState {
    /// The one hero of the session
    pub hero: Hero,

    /// Live enemies
    pub enemies: SlotMap<EnemyId, Enemy>,

    /// Live projectiles, including an active whip hitbox
    pub projectiles: SlotMap<ProjectileId, Projectile>,

    ground: Vec<GroundSegment>,
    segment_width: f32,
    ground_height: f32,
    total_width: f32,
    last_enemy_spawn_x: f32,
}

impl WorldState {
    /// Build the initial world: pre-generated ground, the hero at its spawn
    /// point and the initial enemy placement
    pub fn new(config: &GameConfig) -> Self {
        let level = &config.level;
        let mut world = Self {
            hero: Hero::spawn(&config.hero, level.ground_height),
            enemies: SlotMap::with_key(),
            projectiles: SlotMap::with_key(),
            ground: Vec::with_capacity(level.initial_segments as usize),
            segment_width: level.segment_width,
            ground_height: level.ground_height,
            total_width: 0.0,
            last_enemy_spawn_x: 0.0,
        };

        for _ in 0..level.initial_segments {
            world.append_ground_segment();
        }
        world.place_initial_enemies(&config.enemy);
        world
    }

    fn place_initial_enemies(&mut self, config: &EnemyConfig) {
        for &x in &config.initial_positions {
            self.spawn_enemy(x, config);
        }
        self.last_enemy_spawn_x = config.initial_positions.iter().copied().fold(0.0, f32::max);
    }

    /// Width of the world; only ever grows
    pub const fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Height of the ground surface
    pub const fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Ground segments, ordered and contiguous from x = 0
    pub fn ground(&self) -> &[GroundSegment] {
        &self.ground
    }

    /// X of the most recently streamed enemy
    pub const fn last_enemy_spawn_x(&self) -> f32 {
        self.last_enemy_spawn_x
    }

    /// Raise the streaming watermark; it never moves backwards
    pub fn advance_watermark(&mut self, x: f32) {
        self.last_enemy_spawn_x = self.last_enemy_spawn_x.max(x);
    }

    /// Append one ground segment at the world end and grow the world
    pub fn append_ground_segment(&mut self) {
        let segment = GroundSegment::new(self.total_width, self.segment_width, self.ground_height);
        self.total_width = segment.end_x();
        self.ground.push(segment);
    }

    /// Ground segment under `x`, if any
    pub fn ground_at(&self, x: f32) -> Option<&GroundSegment> {
        let index = self.ground.partition_point(|segment| segment.end_x() <= x);
        self.ground.get(index).filter(|segment| segment.start_x() <= x)
    }

    /// Indices of the ground segments overlapping `[left, right]`
    pub fn ground_range(&self, left: f32, right: f32) -> std::ops::Range<usize> {
        let start = self.ground.partition_point(|segment| segment.end_x() < left);
        let end = self.ground.partition_point(|segment| segment.start_x() <= right);
        start..end.max(start)
    }

    /// Add an enemy patrolling around `x`
    pub fn spawn_enemy(&mut self, x: f32, config: &EnemyConfig) -> EnemyId {
        self.enemies.insert(Enemy::spawn(x, config, self.ground_height))
    }

    /// Remove an enemy; `None` when it is already gone
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        self.enemies.remove(id)
    }

    /// Add a projectile
    pub fn spawn_projectile(&mut self, projectile: Projectile) -> ProjectileId {
        self.projectiles.insert(projectile)
    }

    /// Remove a projectile; `None` when it is already gone
    pub fn remove_projectile(&mut self, id: ProjectileId) -> Option<Projectile> {
        self.projectiles.remove(id)
    }

    /// Horizontal range the hero is kept in
    pub fn hero_x_range(&self, margin: f32) -> (f32, f32) {
        (margin, self.total_width - margin)
    }

    /// Drive the hero from held directions, integrate every moving body,
    /// rest the hero on the ground and keep it inside the world
    ///
    /// Walkers are held inside their patrol range here, so contacts resolved
    /// later in the tick never see an enemy past its bounds.
    pub fn integrate(&mut self, delta_time: f32, config: &GameConfig, held: HeldDirection) {
        let physics = &config.physics;
        let gravity = Vec2::new(0.0, -physics.gravity);

        let hero = &mut self.hero;
        match held {
            HeldDirection::Left => hero.body.velocity.x = -physics.hero_speed,
            HeldDirection::Right => hero.body.velocity.x = physics.hero_speed,
            HeldDirection::None => hero.body.velocity.x *= physics.ground_friction,
        }
        hero.body.integrate(delta_time, gravity);

        let (min_x, max_x) = self.hero_x_range(config.hero.world_margin);
        self.hero.body.clamp_x(min_x, max_x);
        let hero_x = self.hero.body.position.x;
        if let Some(surface_y) = self.ground_at(hero_x).map(GroundSegment::surface_y) {
            self.hero.body.settle_on_surface(surface_y);
        }

        for enemy in self.enemies.values_mut() {
            enemy.body.integrate(delta_time, gravity);
            enemy.body.clamp_x(enemy.patrol_start, enemy.patrol_end);
        }

        let hero_position = self.hero.body.position;
        for projectile in self.projectiles.values_mut() {
            match projectile.kind {
                ProjectileKind::Cross => projectile.body.integrate(delta_time, gravity),
                ProjectileKind::WhipHitbox => projectile
                    .body
                    .teleport(Projectile::whip_position(hero_position, projectile.facing, &config.combat)),
            }
        }
    }
}

/// Direction the player is currently holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeldDirection {
    /// Nothing held; the hero slows down
    #[default]
    None,
    /// Left held
    Left,
    /// Right held
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn world() -> WorldState {
        WorldState::new(&GameConfig::default())
    }

    #[test]
    fn test_initial_ground_is_contiguous() {
        let world = world();
        assert_eq!(world.ground().len(), 40);
        assert_relative_eq!(world.total_width(), 8000.0);
        assert_relative_eq!(world.ground()[0].start_x(), 0.0);
        for pair in world.ground().windows(2) {
            assert_relative_eq!(pair[0].end_x(), pair[1].start_x());
        }
        assert_relative_eq!(world.ground().last().unwrap().end_x(), world.total_width());
    }

    #[test]
    fn test_initial_enemies_and_watermark() {
        let world = world();
        assert_eq!(world.enemies.len(), 15);
        assert_relative_eq!(world.last_enemy_spawn_x(), 7800.0);
    }

    #[test]
    fn test_watermark_never_decreases() {
        let mut world = world();
        world.advance_watermark(100.0);
        assert_relative_eq!(world.last_enemy_spawn_x(), 7800.0);
        world.advance_watermark(8300.0);
        assert_relative_eq!(world.last_enemy_spawn_x(), 8300.0);
    }

    #[test]
    fn test_ground_lookup() {
        let world = world();
        assert_relative_eq!(world.ground_at(0.0).unwrap().start_x(), 0.0);
        assert_relative_eq!(world.ground_at(399.9).unwrap().start_x(), 200.0);
        assert_relative_eq!(world.ground_at(400.0).unwrap().start_x(), 400.0);
        assert!(world.ground_at(8000.0).is_none());
        assert!(world.ground_at(-1.0).is_none());
    }

    #[test]
    fn test_ground_range() {
        let world = world();
        assert_eq!(world.ground_range(141.0, 159.0), 0..1);
        assert_eq!(world.ground_range(190.0, 210.0), 0..2);
        assert_eq!(world.ground_range(9000.0, 9100.0), 40..40);
    }

    #[test]
    fn test_append_grows_world() {
        let mut world = world();
        world.append_ground_segment();
        assert_relative_eq!(world.total_width(), 8200.0);
        assert_eq!(world.ground().len(), 41);
    }

    #[test]
    fn test_hero_rests_on_ground() {
        let config = GameConfig::default();
        let mut world = WorldState::new(&config);
        for _ in 0..120 {
            world.integrate(1.0 / 60.0, &config, HeldDirection::None);
        }
        assert_relative_eq!(world.hero.body.bounds().bottom(), 60.0, epsilon = 1e-3);
        assert_eq!(world.hero.body.velocity.y, 0.0);
    }

    #[test]
    fn test_held_direction_moves_hero() {
        let config = GameConfig::default();
        let mut world = WorldState::new(&config);
        world.integrate(0.5, &config, HeldDirection::Right);
        assert_relative_eq!(world.hero.position().x, 250.0);

        world.integrate(0.0, &config, HeldDirection::None);
        assert_relative_eq!(world.hero.body.velocity.x, 170.0);
    }

    #[test]
    fn test_enemies_stay_inside_patrol() {
        let config = GameConfig::default();
        let mut world = WorldState::new(&config);
        for enemy in world.enemies.values_mut() {
            enemy.body.velocity.x = -40_000.0;
        }
        world.integrate(1.0 / 60.0, &config, HeldDirection::None);
        for enemy in world.enemies.values() {
            assert_relative_eq!(enemy.position().x, enemy.patrol_start);
        }
    }

    #[test]
    fn test_hero_is_clamped_to_world() {
        let config = GameConfig::default();
        let mut world = WorldState::new(&config);
        world.integrate(2.0, &config, HeldDirection::Left);
        assert_relative_eq!(world.hero.position().x, 20.0);
    }
}
