//! Session state machine and life/score bookkeeping

use serde::{Deserialize, Serialize};

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// The simulation advances every tick
    #[default]
    Playing,
    /// Lives ran out; only a restart is accepted
    GameOver,
}

/// Result of losing a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Already game over; nothing changed
    Ignored,
    /// A life was lost and the run continues
    Survived {
        /// Lives remaining
        lives_left: u32,
    },
    /// The last life was lost; the session just entered game over
    Ended,
}

/// Lives, score and the Playing/GameOver state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    state: SessionState,
    score: u64,
    lives: u32,
}

impl Scoreboard {
    /// Fresh scoreboard in the playing state
    pub const fn new(starting_lives: u32) -> Self {
        Self {
            state: SessionState::Playing,
            score: 0,
            lives: starting_lives,
        }
    }

    /// Current state
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the run has ended
    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Current score
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Lives left
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Add `points` to the score
    pub fn award(&mut self, points: u32) {
        self.score += u64::from(points);
    }

    /// Take one life; entering game over exactly when the last one goes
    pub fn lose_life(&mut self) -> LifeLoss {
        if self.is_game_over() {
            return LifeLoss::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.state = SessionState::GameOver;
            LifeLoss::Ended
        } else {
            LifeLoss::Survived { lives_left: self.lives }
        }
    }

    /// Back to a fresh run
    pub fn reset(&mut self, starting_lives: u32) {
        *self = Self::new(starting_lives);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_loss_ends_the_run() {
        let mut board = Scoreboard::new(3);
        assert_eq!(board.lose_life(), LifeLoss::Survived { lives_left: 2 });
        assert_eq!(board.lose_life(), LifeLoss::Survived { lives_left: 1 });
        assert_eq!(board.state(), SessionState::Playing);
        assert_eq!(board.lose_life(), LifeLoss::Ended);
        assert_eq!(board.state(), SessionState::GameOver);
        assert_eq!(board.lives(), 0);
    }

    #[test]
    fn test_losses_after_game_over_are_ignored() {
        let mut board = Scoreboard::new(1);
        assert_eq!(board.lose_life(), LifeLoss::Ended);
        assert_eq!(board.lose_life(), LifeLoss::Ignored);
        assert_eq!(board.lives(), 0);
    }

    #[test]
    fn test_reset() {
        let mut board = Scoreboard::new(3);
        board.award(100);
        board.lose_life();
        board.reset(3);
        assert_eq!(board, Scoreboard::new(3));
    }
}
