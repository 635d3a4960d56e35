// Key binding configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to game actions. Several keys may share one action.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,
    /// Reverse mapping (action -> every key bound to it)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration holding the default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Remove every key bound to an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn get_keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the keys of every action named in `overrides`.
    ///
    /// Actions not named keep their current keys. A key already bound to
    /// another action moves to the overriding one.
    pub fn apply_overrides(&mut self, overrides: &HashMap<Action, Vec<KeyCode>>) {
        for (action, keys) in overrides {
            self.unbind_action(*action);
            for key in keys {
                self.bind(*key, *action);
            }
        }
    }
}
