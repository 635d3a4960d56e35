// Input manager - turns keyboard events into player actions

use super::action::Action;
use super::config::InputConfig;
use super::player::{Controls, PlayerInput};
use log::debug;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Coordinates key bindings and the player's pressed state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    /// Physical keys currently held down
    held_keys: HashSet<KeyCode>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            held_keys: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            match event.state {
                ElementState::Pressed if !event.repeat => self.key_down(key),
                ElementState::Pressed => {}
                ElementState::Released => self.key_up(key),
            }
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if !self.held_keys.insert(key) {
            return;
        }
        if let Some(action) = self.config.get_action(key) {
            debug!("{:?} pressed ({:?})", action, key);
            self.player.press(action);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        if !self.held_keys.remove(&key) {
            return;
        }
        let Some(action) = self.config.get_action(key) else {
            return;
        };
        // Another key bound to the same action keeps it held
        let still_held = self
            .config
            .get_keys(action)
            .iter()
            .any(|k| self.held_keys.contains(k));
        if !still_held {
            debug!("{:?} released ({:?})", action, key);
            self.player.release(action);
        }
    }

    /// Start a new frame. Call once per frame after processing all events.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn controls(&self) -> Controls {
        self.player.controls()
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_maps_to_action() {
        let mut manager = InputManager::default();
        manager.key_down(KeyCode::ArrowLeft);
        assert!(manager.player.is_pressed(Action::MoveLeft));
        assert_eq!(manager.controls(), Controls::left());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::default();
        manager.key_down(KeyCode::KeyQ);
        assert_eq!(manager.controls(), Controls::NONE);
    }

    #[test]
    fn test_release_with_alternate_key_held() {
        let mut manager = InputManager::default();
        manager.key_down(KeyCode::ArrowUp);
        manager.key_down(KeyCode::KeyW);
        manager.key_up(KeyCode::ArrowUp);
        assert!(manager.controls().jump);

        manager.key_up(KeyCode::KeyW);
        assert!(!manager.controls().jump);
    }

    #[test]
    fn test_update_clears_just_pressed() {
        let mut manager = InputManager::default();
        manager.key_down(KeyCode::KeyP);
        assert!(manager.just_pressed(Action::Pause));

        manager.update();
        assert!(!manager.just_pressed(Action::Pause));
        assert!(manager.player.is_pressed(Action::Pause));
    }

    #[test]
    fn test_custom_bindings() {
        let mut config = InputConfig::with_defaults();
        config.bind(KeyCode::KeyL, Action::MoveRight);
        let mut manager = InputManager::new(config);

        manager.key_down(KeyCode::KeyL);
        assert!(manager.controls().right);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut manager = InputManager::default();
        manager.key_down(KeyCode::ArrowRight);
        manager.reset();
        assert_eq!(manager.controls(), Controls::NONE);

        // The key counts as a fresh press afterwards
        manager.key_down(KeyCode::ArrowRight);
        assert!(manager.controls().right);
    }
}
