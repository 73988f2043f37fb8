use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Keys use the `winit::keyboard::KeyCode` debug format so TOML presets
/// stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// Space = "jump"
/// ```
/// Several keys may share one action (both shift keys sprint).
pub struct KeybindingOptions {
    /// Maps key string → action.
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyA".into(), KeyAction::MoveLeft),
            ("KeyD".into(), KeyAction::MoveRight),
            ("ShiftLeft".into(), KeyAction::Sprint),
            ("ShiftRight".into(), KeyAction::Sprint),
            ("Space".into(), KeyAction::Jump),
            ("KeyR".into(), KeyAction::ResetCamera),
            ("KeyO".into(), KeyAction::ToggleOrbit),
            ("KeyF".into(), KeyAction::ToggleFollow),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }

    /// All keys currently bound to `action`, sorted.
    #[must_use]
    pub fn keys_for(&self, action: KeyAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}
