//! Headless runner
//!
//! Plays a scripted run without any presentation layer and logs what
//! happened. Usage: `night_hunter [config.toml|config.ron] [frames]`.

use night_hunter::prelude::*;
use scroll_engine::foundation::logging;
use thiserror::Error;

const DEFAULT_FRAMES: u32 = 3600;
const FRAME_RATE: f64 = 60.0;

#[derive(Debug, Error)]
enum RunError {
    #[error("invalid frame count `{0}`")]
    FrameCount(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path).map_err(RunError::from)?,
        None => GameConfig::default(),
    };
    let frames = match args.next() {
        Some(raw) => raw.parse::<u32>().map_err(|_| RunError::FrameCount(raw))?,
        None => DEFAULT_FRAMES,
    };

    let mut session = GameSession::new(config).map_err(RunError::from)?;
    log::info!("Running {} frames", frames);

    let mut kills = 0_usize;
    for frame in 0..frames {
        drive(&mut session, frame);
        session.tick(f64::from(frame) / FRAME_RATE);

        for event in session.drain_events() {
            match event {
                GameEvent::EnemyKilled { cause, .. } => {
                    kills += 1;
                    log::debug!("Frame {}: kill by {:?}", frame, cause);
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("Frame {}: game over, score {}", frame, final_score);
                }
                _ => {}
            }
        }

        if session.state() == SessionState::GameOver {
            break;
        }
    }

    let view = session.snapshot();
    let distance = view.hero().map_or(0.0, |hero| hero.position.x);
    log::info!(
        "Finished: score {}, lives {}, kills {}, distance {:.0}, state {:?}",
        view.score,
        view.lives,
        kills,
        distance,
        view.status
    );
    Ok(())
}

/// Scripted input: run right, hop regularly and attack in between
fn drive(session: &mut GameSession, frame: u32) {
    if frame == 0 {
        session.on_press_right();
    }
    if frame % 40 == 0 {
        session.on_jump();
    }
    if frame % 25 == 10 {
        session.on_attack();
    }
}
