use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SceneError;
use crate::session::KeyAction;

const DEFAULT_BINDINGS: [(KeyAction, &str); 12] = [
    (KeyAction::SpawnCube, "Digit1"),
    (KeyAction::SpawnSphere, "Digit2"),
    (KeyAction::SpawnCylinder, "Digit3"),
    (KeyAction::SpawnCapsule, "Digit4"),
    (KeyAction::SpawnPlane, "Digit5"),
    (KeyAction::UndoLastShape, "KeyZ"),
    (KeyAction::ToggleHand, "KeyH"),
    (KeyAction::StartSculpting, "KeyS"),
    (KeyAction::StopSculpting, "KeyX"),
    (KeyAction::BrushPush, "KeyP"),
    (KeyAction::BrushPull, "KeyL"),
    (KeyAction::BrushSmooth, "KeyM"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `UndoLastShape` → `"KeyZ"`).
    ///
    /// A partial table in a preset overrides only the actions it names.
    /// Defaults whose key was claimed by an override are left unbound.
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: FxHashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .into_iter()
        .map(|(action, key)| (action, key.to_owned()))
        .collect();

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key. Any other action
    /// holding `key` is unbound.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        self.bindings
            .retain(|other, bound| *other == action || bound != key);
        let _ = self.bindings.insert(action, key.to_owned());
        self.rebuild_reverse_map();
    }

    /// Reject tables where one key is bound to more than one action.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] naming the shared key.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen: FxHashMap<&str, KeyAction> = FxHashMap::default();
        for (action, key) in &self.bindings {
            if let Some(other) = seen.insert(key.as_str(), *action) {
                return Err(SceneError::InvalidOptions(format!(
                    "keybindings: {key} is bound to both {other:?} and {action:?}"
                )));
            }
        }
        Ok(())
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

/// Lay a partial bindings table over the defaults.
fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<FxHashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut bindings = FxHashMap::<KeyAction, String>::deserialize(deserializer)?;
    for (action, key) in DEFAULT_BINDINGS {
        if !bindings.contains_key(&action) && !bindings.values().any(|k| k == key)
        {
            let _ = bindings.insert(action, key.to_owned());
        }
    }
    Ok(bindings)
}
