//! Patrol behaviour for enemies

use slotmap::SlotMap;

use crate::actors::{Enemy, EnemyId, PatrolState};

/// Advance one enemy's patrol
///
/// Reaching a bound clamps the enemy onto it and turns it around; the
/// walking velocity is then set from the (possibly new) direction.
pub fn patrol_step(enemy: &mut Enemy, speed: f32) {
    let x = enemy.body.position.x;
    match enemy.state {
        PatrolState::MovingLeft if x <= enemy.patrol_start => {
            enemy.body.position.x = enemy.patrol_start;
            enemy.state = PatrolState::MovingRight;
        }
        PatrolState::MovingRight if x >= enemy.patrol_end => {
            enemy.body.position.x = enemy.patrol_end;
            enemy.state = PatrolState::MovingLeft;
        }
        _ => {}
    }
    enemy.body.velocity.x = enemy.state.direction() * speed;
}

/// Advance every enemy's patrol
pub fn update_patrols(enemies: &mut SlotMap<EnemyId, Enemy>, speed: f32) {
    for enemy in enemies.values_mut() {
        patrol_step(enemy, speed);
    }
}
