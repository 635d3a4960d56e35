// Pressed-action state for the local player

use super::action::Action;
use std::collections::HashSet;

/// Snapshot of the held movement keys for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[cfg(test)]
impl Controls {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        jump: false,
    };

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::NONE
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::NONE
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

/// Input state for the player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held
    pressed: HashSet<Action>,
    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Start a new frame: forget the edge-triggered state
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Held movement keys as a `Controls` snapshot
    pub fn controls(&self) -> Controls {
        Controls {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump: self.is_pressed(Action::Jump),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Pause);
        input.update();
        assert!(input.is_pressed(Action::Pause));
        assert!(!input.just_pressed(Action::Pause));
    }

    #[test]
    fn test_repress_after_release() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_controls_snapshot() {
        let mut input = PlayerInput::new();
        assert_eq!(input.controls(), Controls::NONE);

        input.press(Action::MoveRight);
        input.press(Action::Jump);
        input.press(Action::Pause);
        assert_eq!(input.controls(), Controls::right().with_jump());
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.reset();
        assert_eq!(input.controls(), Controls::NONE);
        assert!(!input.just_pressed(Action::MoveLeft));
    }
}
