// Game actions and their default key bindings

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// Everything the player can ask for from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Meta actions
    ToggleOverlay,
    Pause,
    Quit,
}

/// Default bindings: arrow keys, with WASD as an alternate
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::F3, Action::ToggleOverlay),
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}
