use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingTable", into = "BindingTable")]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// A TOML file only needs to list the bindings it changes; every action it
/// leaves out keeps its default key.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action).
    key_to_action: HashMap<String, KeyAction>,
}

/// On-disk shape of [`KeybindingOptions`].
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct BindingTable {
    bindings: HashMap<KeyAction, String>,
}

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        let mut opts = Self::default();
        let mut entries: Vec<_> = table.bindings.into_iter().collect();
        entries.sort_unstable_by_key(|(action, _)| *action);
        for (action, key) in entries {
            opts.assign(action, key);
        }
        opts.rebuild_reverse_map();
        opts
    }
}

impl From<KeybindingOptions> for BindingTable {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.bindings,
        }
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveUp, "Space".into()),
            (KeyAction::MoveDown, "KeyZ".into()),
            (KeyAction::PitchUp, "ArrowUp".into()),
            (KeyAction::PitchDown, "ArrowDown".into()),
            (KeyAction::YawLeft, "ArrowLeft".into()),
            (KeyAction::YawRight, "ArrowRight".into()),
            (KeyAction::ResetView, "KeyC".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebind `action` to `key`, replacing its previous key. Any other
    /// action bound to `key` loses its binding.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        self.assign(action, key.into());
        self.rebuild_reverse_map();
    }

    fn assign(&mut self, action: KeyAction, key: String) {
        self.bindings
            .retain(|bound, bound_key| *bound == action || *bound_key != key);
        let _ = self.bindings.insert(action, key);
    }

    /// Rebuild the reverse lookup map (key string → action). If `bindings`
    /// was edited into a collision, the greatest action wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_unstable_by_key(|(action, _)| **action);
        for (action, key) in entries {
            if let Some(previous) =
                self.key_to_action.insert(key.clone(), *action)
            {
                log::warn!(
                    "key {key} bound to both {previous:?} and {action:?}"
                );
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_a_taken_key_unbinds_its_old_action() {
        for _ in 0..50 {
            let mut opts = KeybindingOptions::default();
            opts.bind(KeyAction::ResetView, "KeyW");
            assert_eq!(opts.lookup("KeyW"), Some(KeyAction::ResetView));
            assert_eq!(opts.lookup("KeyC"), None);
            assert!(!opts.bindings.contains_key(&KeyAction::MoveForward));
        }
    }

    #[test]
    fn file_bindings_win_over_defaults() {
        for _ in 0..50 {
            let opts: KeybindingOptions =
                toml::from_str("[bindings]\nreset_view = \"KeyW\"\n")
                    .unwrap();
            assert_eq!(opts.lookup("KeyW"), Some(KeyAction::ResetView));
            assert_eq!(opts.lookup("KeyA"), Some(KeyAction::MoveLeft));
        }
    }

    #[test]
    fn colliding_file_bindings_resolve_the_same_way_every_time() {
        let source = "[bindings]\nmove_left = \"KeyQ\"\nquit = \"KeyQ\"\n";
        let first: KeybindingOptions = toml::from_str(source).unwrap();
        let winner = first.lookup("KeyQ");
        assert!(winner.is_some());
        for _ in 0..50 {
            let opts: KeybindingOptions = toml::from_str(source).unwrap();
            assert_eq!(opts.lookup("KeyQ"), winner);
            assert_eq!(opts.bindings.len(), first.bindings.len());
        }
    }
}
