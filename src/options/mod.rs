//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera bounds and speeds, input interpretation,
//! spawn positions, keybindings) are consolidated here. Options serialize
//! to/from TOML so a session can be configured from a preset file.

mod camera;
mod input;
mod keybindings;
mod spawner;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spawner::SpawnerOptions;

use crate::error::SceneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit rig bounds and speeds.
    pub camera: CameraOptions,
    /// Input interpretation.
    pub input: InputOptions,
    /// Shape spawn positions.
    pub spawner: SpawnerOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text, fill defaults, and validate.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OptionsParse`] for malformed TOML and
    /// [`SceneError::InvalidOptions`] if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Options::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OptionsParse`] if serialization fails, or
    /// [`SceneError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// Check every section for values the runtime cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] describing the first bad value.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.camera.validate()?;
        self.keybindings.validate()?;
        if !(self.input.max_frame_step.is_finite()
            && self.input.max_frame_step > 0.0)
        {
            return Err(SceneError::InvalidOptions(format!(
                "input.max_frame_step must be positive, got {}",
                self.input.max_frame_step
            )));
        }
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
