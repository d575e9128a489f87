//! Cross-component scenarios driven through a whole session


use scroll_engine::foundation::math::Vec2;

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::session::GameSession;

const DT: f32 = 1.0 / 60.0;

fn seeded_session() -> GameSession {
    let mut config = GameConfig::default();
    config.level.seed = Some(2024);
    GameSession::new(config).unwrap()
}

fn run(session: &mut GameSession, ticks: usize) {
    for _ in 0..ticks {
        session.update(DT);
    }
}

/// Put the hero somewhere with a given velocity
fn place_hero(session: &mut GameSession, position: Vec2, velocity: Vec2) {
    let body = &mut session.world_mut().hero.body;
    body.teleport(position);
    body.velocity = velocity;
}

fn count_events(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
    events.iter().filter(|event| pred(event)).count()
}
