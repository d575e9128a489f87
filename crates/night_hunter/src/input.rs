//! Player intent collected between ticks
//!
//! Directions are level-triggered (held until released). Jump and attack are
//! edge-triggered: a press is remembered until the next tick consumes it, and
//! pressing twice before that tick still yields one action.

use crate::world::HeldDirection;

/// Intent flags written by input events and read by the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    jump_requested: bool,
    attack_requested: bool,
}

impl InputState {
    /// Create an input state with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether left is held
    pub fn set_left(&mut self, held: bool) {
        self.left_held = held;
    }

    /// Set whether right is held
    pub fn set_right(&mut self, held: bool) {
        self.right_held = held;
    }

    /// Release both directions
    pub fn release_directions(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Remember a jump press for the next tick
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Remember an attack press for the next tick
    pub fn request_attack(&mut self) {
        self.attack_requested = true;
    }

    /// Held direction; left wins when both are held
    pub const fn held_direction(&self) -> HeldDirection {
        if self.left_held {
            HeldDirection::Left
        } else if self.right_held {
            HeldDirection::Right
        } else {
            HeldDirection::None
        }
    }

    /// Consume a pending jump press
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Consume a pending attack press
    pub fn take_attack(&mut self) -> bool {
        std::mem::take(&mut self.attack_requested)
    }

    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_wins_over_right() {
        let mut input = InputState::new();
        input.set_right(true);
        assert_eq!(input.held_direction(), HeldDirection::Right);
        input.set_left(true);
        assert_eq!(input.held_direction(), HeldDirection::Left);
        input.set_left(false);
        assert_eq!(input.held_direction(), HeldDirection::Right);
    }

    #[test]
    fn test_one_shot_actions_are_consumed() {
        let mut input = InputState::new();
        input.request_jump();
        input.request_jump();
        assert!(input.take_jump());
        assert!(!input.take_jump());

        input.request_attack();
        assert!(input.take_attack());
        assert!(!input.take_attack());
    }

    #[test]
    fn test_release_directions_keeps_pending_actions() {
        let mut input = InputState::new();
        input.set_left(true);
        input.set_right(true);
        input.request_attack();
        input.release_directions();
        assert_eq!(input.held_direction(), HeldDirection::None);
        assert!(input.take_attack());
    }
}
