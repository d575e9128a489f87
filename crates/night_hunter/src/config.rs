//! Game configuration
//!
//! Every tunable constant of the simulation lives here. `Default` reproduces
//! the shipped game; files only need to name the values they change.

use scroll_engine::config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Movement and gravity
    pub physics: PhysicsConfig,

    /// Hero geometry, spawn and lives
    pub hero: HeroConfig,

    /// Whip, cross and scoring
    pub combat: CombatConfig,

    /// Enemy geometry and patrol
    pub enemy: EnemyConfig,

    /// Ground layout and enemy streaming
    pub level: LevelConfig,

    /// Viewport and parallax layers
    pub camera: CameraConfig,
}

/// Movement and gravity settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in units/s²
    pub gravity: f32,

    /// Horizontal speed while a direction is held
    pub hero_speed: f32,

    /// Per-tick multiplier on horizontal speed when no direction is held
    pub ground_friction: f32,

    /// Upward velocity change of a jump
    pub jump_speed: f32,

    /// Upward velocity change after stomping an enemy
    pub stomp_bounce_speed: f32,

    /// Horizontal knockback when hit, applied away from the facing direction
    pub knockback_x: f32,

    /// Vertical knockback when hit
    pub knockback_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            hero_speed: 200.0,
            ground_friction: 0.85,
            jump_speed: 640.0,
            stomp_bounce_speed: 384.0,
            knockback_x: 160.0,
            knockback_y: 240.0,
        }
    }
}

/// Most lives a run may start with
pub const MAX_LIVES: u32 = 3;

/// Hero settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Spawn x
    pub spawn_x: f32,

    /// Spawn height above the ground surface
    pub spawn_height: f32,

    /// Half width of the hero's box
    pub half_width: f32,

    /// Half height of the hero's box
    pub half_height: f32,

    /// Lives at session start and after restart
    pub starting_lives: u32,

    /// Distance the hero is kept from either world edge
    pub world_margin: f32,

    /// Falling below this y costs a life
    pub fall_threshold_y: f32,

    /// Height above the ground surface used when respawning after a fall
    pub respawn_height: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            spawn_x: 150.0,
            spawn_height: 40.0,
            half_width: 9.0,
            half_height: 20.0,
            starting_lives: 3,
            world_margin: 20.0,
            fall_threshold_y: -50.0,
            respawn_height: 60.0,
        }
    }
}

/// Whip, cross and scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Whip wind-up phase in seconds
    pub whip_wind_up: f32,

    /// Whip lash phase in seconds
    pub whip_lash: f32,

    /// Whip retract phase in seconds
    pub whip_retract: f32,

    /// Horizontal distance from the hero to the whip hitbox centre
    pub whip_reach: f32,

    /// Vertical offset of the whip hitbox centre
    pub whip_height: f32,

    /// Half width of the whip hitbox
    pub whip_half_width: f32,

    /// Half height of the whip hitbox
    pub whip_half_height: f32,

    /// Horizontal speed of a thrown cross
    pub cross_speed: f32,

    /// Horizontal spawn offset of a cross, in the facing direction
    pub cross_offset_x: f32,

    /// Vertical spawn offset of a cross
    pub cross_offset_y: f32,

    /// Half size of the cross's square box
    pub cross_half_size: f32,

    /// Seconds before an unspent cross disappears
    pub cross_lifetime: f32,

    /// Score awarded per enemy killed
    pub kill_reward: u32,

    /// Slack allowed when deciding whether the hero landed on an enemy
    pub stomp_tolerance: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            whip_wind_up: 0.08,
            whip_lash: 0.12,
            whip_retract: 0.10,
            whip_reach: 68.0,
            whip_height: 2.0,
            whip_half_width: 15.0,
            whip_half_height: 8.0,
            cross_speed: 350.0,
            cross_offset_x: 15.0,
            cross_offset_y: 5.0,
            cross_half_size: 7.0,
            cross_lifetime: 2.0,
            kill_reward: 100,
            stomp_tolerance: 5.0,
        }
    }
}

/// Enemy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Half of the patrol range around the spawn point
    pub patrol_half_width: f32,

    /// Patrol walking speed
    pub patrol_speed: f32,

    /// Half width of the enemy box
    pub half_width: f32,

    /// Half height of the enemy box
    pub half_height: f32,

    /// Vertical offset of the box centre from the enemy origin
    pub box_offset_y: f32,

    /// Height of the stompable top above the enemy origin
    pub top_offset: f32,

    /// Height of the enemy origin above the ground surface
    pub walk_height: f32,

    /// X positions of the enemies placed at session start
    pub initial_positions: Vec<f32>,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            patrol_half_width: 60.0,
            patrol_speed: 40.0,
            half_width: 14.0,
            half_height: 10.0,
            box_offset_y: -2.0,
            top_offset: 10.0,
            walk_height: 18.0,
            initial_positions: vec![
                500.0, 900.0, 1300.0, 1800.0, 2200.0, 2800.0, 3300.0, 3900.0, 4500.0, 5100.0, 5600.0, 6100.0, 6700.0,
                7200.0, 7800.0,
            ],
        }
    }
}

/// Ground layout and enemy streaming settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Width of one ground segment
    pub segment_width: f32,

    /// Segments generated at session start
    pub initial_segments: u32,

    /// Height of the ground surface
    pub ground_height: f32,

    /// Stream an enemy when the hero is within this distance of the watermark
    pub spawn_lookahead: f32,

    /// Smallest gap between streamed enemies
    pub spawn_gap_min: f32,

    /// Largest gap between streamed enemies
    pub spawn_gap_max: f32,

    /// Streamed enemies never spawn closer than this to the world end
    pub spawn_end_margin: f32,

    /// Append ground segments as the hero approaches the world end
    pub extend_ground: bool,

    /// Keep at least this much ground ahead of the hero when extending
    pub ground_lookahead: f32,

    /// RNG seed for spawn gaps; entropy when absent
    pub seed: Option<u64>,
}

impl LevelConfig {
    /// World width covered by the initial ground
    pub fn initial_width(&self) -> f32 {
        self.initial_segments as f32 * self.segment_width
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            segment_width: 200.0,
            initial_segments: 40,
            ground_height: 60.0,
            spawn_lookahead: 800.0,
            spawn_gap_min: 400.0,
            spawn_gap_max: 700.0,
            spawn_end_margin: 100.0,
            extend_ground: true,
            ground_lookahead: 1200.0,
            seed: None,
        }
    }
}

/// Viewport and parallax settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width in world units
    pub viewport_width: f32,

    /// Viewport height in world units
    pub viewport_height: f32,

    /// Scroll factor per background layer, far to near
    pub parallax_factors: Vec<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 450.0,
            parallax_factors: vec![0.2, 0.4],
        }
    }
}

impl Config for GameConfig {}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be zero or positive, got {value}")))
    }
}

impl GameConfig {
    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        non_negative("physics.gravity", physics.gravity)?;
        non_negative("physics.hero_speed", physics.hero_speed)?;
        if !(0.0..=1.0).contains(&physics.ground_friction) {
            return Err(ConfigError::invalid("physics.ground_friction", "must be within [0, 1]"));
        }
        non_negative("physics.jump_speed", physics.jump_speed)?;
        non_negative("physics.stomp_bounce_speed", physics.stomp_bounce_speed)?;
        finite("physics.knockback_x", physics.knockback_x)?;
        finite("physics.knockback_y", physics.knockback_y)?;

        let hero = &self.hero;
        positive("hero.half_width", hero.half_width)?;
        positive("hero.half_height", hero.half_height)?;
        non_negative("hero.world_margin", hero.world_margin)?;
        finite("hero.spawn_x", hero.spawn_x)?;
        finite("hero.spawn_height", hero.spawn_height)?;
        finite("hero.fall_threshold_y", hero.fall_threshold_y)?;
        non_negative("hero.respawn_height", hero.respawn_height)?;
        if !(1..=MAX_LIVES).contains(&hero.starting_lives) {
            return Err(ConfigError::invalid(
                "hero.starting_lives",
                format!("must be within [1, {MAX_LIVES}], got {}", hero.starting_lives),
            ));
        }

        let combat = &self.combat;
        positive("combat.whip_wind_up", combat.whip_wind_up)?;
        positive("combat.whip_lash", combat.whip_lash)?;
        positive("combat.whip_retract", combat.whip_retract)?;
        positive("combat.cross_lifetime", combat.cross_lifetime)?;
        positive("combat.whip_half_width", combat.whip_half_width)?;
        positive("combat.whip_half_height", combat.whip_half_height)?;
        positive("combat.cross_half_size", combat.cross_half_size)?;
        non_negative("combat.stomp_tolerance", combat.stomp_tolerance)?;
        finite("combat.whip_reach", combat.whip_reach)?;
        finite("combat.whip_height", combat.whip_height)?;
        finite("combat.cross_speed", combat.cross_speed)?;
        finite("combat.cross_offset_x", combat.cross_offset_x)?;
        finite("combat.cross_offset_y", combat.cross_offset_y)?;

        let enemy = &self.enemy;
        non_negative("enemy.patrol_half_width", enemy.patrol_half_width)?;
        non_negative("enemy.patrol_speed", enemy.patrol_speed)?;
        positive("enemy.half_width", enemy.half_width)?;
        positive("enemy.half_height", enemy.half_height)?;
        finite("enemy.box_offset_y", enemy.box_offset_y)?;
        finite("enemy.top_offset", enemy.top_offset)?;
        finite("enemy.walk_height", enemy.walk_height)?;
        for &x in &enemy.initial_positions {
            finite("enemy.initial_positions", x)?;
        }

        let level = &self.level;
        positive("level.segment_width", level.segment_width)?;
        if level.initial_segments == 0 {
            return Err(ConfigError::invalid("level.initial_segments", "must be at least 1"));
        }
        positive("level.ground_height", level.ground_height)?;
        non_negative("level.spawn_lookahead", level.spawn_lookahead)?;
        non_negative("level.spawn_end_margin", level.spawn_end_margin)?;
        non_negative("level.spawn_gap_min", level.spawn_gap_min)?;
        non_negative("level.spawn_gap_max", level.spawn_gap_max)?;
        if level.spawn_gap_min > level.spawn_gap_max {
            return Err(ConfigError::invalid(
                "level.spawn_gap_min",
                format!("exceeds spawn_gap_max ({} > {})", level.spawn_gap_min, level.spawn_gap_max),
            ));
        }
        non_negative("level.ground_lookahead", level.ground_lookahead)?;

        let camera = &self.camera;
        positive("camera.viewport_width", camera.viewport_width)?;
        positive("camera.viewport_height", camera.viewport_height)?;
        for &factor in &camera.parallax_factors {
            finite("camera.parallax_factors", factor)?;
        }
        if camera.viewport_width > level.initial_width() {
            return Err(ConfigError::invalid(
                "camera.viewport_width",
                format!("wider than the initial level ({})", level.initial_width()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_level_width() {
        assert_eq!(LevelConfig::default().initial_width(), 8000.0);
    }

    #[test]
    fn test_rejects_inverted_spawn_gap() {
        let mut config = GameConfig::default();
        config.level.spawn_gap_min = 800.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "level.spawn_gap_min", .. }));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let mut config = GameConfig::default();
        config.hero.starting_lives = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_more_than_three_lives() {
        let mut config = GameConfig::default();
        config.hero.starting_lives = 4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "hero.starting_lives", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_spawn_gap() {
        let mut config = GameConfig::default();
        config.level.spawn_gap_max = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "level.spawn_gap_max", .. })
        ));

        config.level.spawn_gap_max = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "level.spawn_gap_max", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_positions_and_factors() {
        let mut config = GameConfig::default();
        config.hero.fall_threshold_y = f32::NEG_INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "hero.fall_threshold_y", .. })
        ));

        let mut config = GameConfig::default();
        config.camera.parallax_factors = vec![0.2, f32::NAN];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "camera.parallax_factors", .. })
        ));
    }

    #[test]
    fn test_rejects_viewport_wider_than_level() {
        let mut config = GameConfig::default();
        config.level.initial_segments = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "camera.viewport_width", .. })
        ));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_hunter.toml");
        std::fs::write(&path, "[level]\nseed = 7\nextend_ground = false\n\n[hero]\nstarting_lives = 2\n").unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();
        assert_eq!(config.level.seed, Some(7));
        assert!(!config.level.extend_ground);
        assert_eq!(config.hero.starting_lives, 2);
        assert_eq!(config.physics, PhysicsConfig::default());
        assert_eq!(config.enemy.initial_positions.len(), 15);
        config.validate().unwrap();
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("night_hunter.ron");
        let mut config = GameConfig::default();
        config.camera.parallax_factors = vec![0.1, 0.3, 0.6];
        config.save_to_file(&path).unwrap();
        assert_eq!(GameConfig::load_from_file(&path).unwrap(), config);
    }
}
