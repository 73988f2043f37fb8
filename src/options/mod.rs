//! Centralized demo options with TOML preset support.
//!
//! All tweakable settings (locomotion tuning, camera rig, animation fades,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! presets, and the UI-exposed subset is described by a JSON Schema.

mod animation;
mod camera;
mod keybindings;
mod locomotion;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::{CameraOptions, OrbitLimits};
pub use keybindings::KeybindingOptions;
pub use locomotion::LocomotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StriderError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Movement, jump, and turning parameters.
    pub locomotion: LocomotionOptions,
    /// Camera rig toggles and tuning.
    pub camera: CameraOptions,
    /// Crossfade durations.
    pub animation: AnimationOptions,
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

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, StriderError> {
        toml::from_str(content)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StriderError> {
        let content =
            std::fs::read_to_string(path).map_err(StriderError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StriderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StriderError::Io)?;
        }
        std::fs::write(path, content).map_err(StriderError::Io)
    }

    /// Return a copy with one `section.field` replaced by a JSON value.
    ///
    /// This is the generic patch path used by UI panels: the whole options
    /// tree is round-tripped through `serde_json` so any field can be set
    /// by name without a hand-written setter.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, StriderError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        let Some(slot) = root
            .get_mut(section)
            .and_then(|s| s.as_object_mut())
            .and_then(|s| s.get_mut(field))
        else {
            return Err(StriderError::OptionsParse(format!(
                "unknown option {section}.{field}"
            )));
        };
        *slot = value;
        serde_json::from_value(root)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))
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
