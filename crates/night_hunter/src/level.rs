//! Level streaming: more ground and more enemies ahead of the hero

use rand::Rng;

use crate::config::{EnemyConfig, LevelConfig};
use crate::events::{EventQueue, GameEvent};
use crate::world::WorldState;

/// Grows the level as the hero moves right
#[derive(Debug, Clone, PartialEq)]
pub struct LevelStreamer {
    spawn_lookahead: f32,
    spawn_gap_min: f32,
    spawn_gap_max: f32,
    spawn_end_margin: f32,
    extend_ground: bool,
    ground_lookahead: f32,
}

impl LevelStreamer {
    /// Create a streamer from level settings
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            spawn_lookahead: config.spawn_lookahead,
            spawn_gap_min: config.spawn_gap_min,
            spawn_gap_max: config.spawn_gap_max,
            spawn_end_margin: config.spawn_end_margin,
            extend_ground: config.extend_ground,
            ground_lookahead: config.ground_lookahead,
        }
    }

    /// Whether a hero at `hero_x` is close enough to the watermark to stream
    /// the next enemy
    pub fn should_spawn(&self, hero_x: f32, watermark: f32) -> bool {
        hero_x > watermark - self.spawn_lookahead
    }

    /// Extend the ground if enabled, then stream at most one enemy
    pub fn update<R: Rng>(
        &self,
        world: &mut WorldState,
        enemy_config: &EnemyConfig,
        rng: &mut R,
        events: &mut EventQueue,
    ) {
        let hero_x = world.hero.position().x;
        if self.extend_ground {
            self.extend_ground(world, hero_x, events);
        }

        let watermark = world.last_enemy_spawn_x();
        if !self.should_spawn(hero_x, watermark) {
            return;
        }

        let new_x = watermark + rng.gen_range(self.spawn_gap_min..=self.spawn_gap_max);
        if new_x >= world.total_width() - self.spawn_end_margin {
            return;
        }

        let id = world.spawn_enemy(new_x, enemy_config);
        world.advance_watermark(new_x);
        log::debug!("Streamed enemy {:?} at x={:.1}", id, new_x);
        events.push(GameEvent::EnemySpawned { id, x: new_x });
    }

    fn extend_ground(&self, world: &mut WorldState, hero_x: f32, events: &mut EventQueue) {
        let before = world.total_width();
        while hero_x + self.ground_lookahead > world.total_width() {
            world.append_ground_segment();
        }

        let total_width = world.total_width();
        if total_width > before {
            log::debug!("Ground extended to {:.0}", total_width);
            events.push(GameEvent::GroundExtended { total_width });
        }
    }
}
