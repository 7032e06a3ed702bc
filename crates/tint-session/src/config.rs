#![forbid(unsafe_code)]

//! Editor configuration loaded from TOML.
//!
//! ```toml
//! # tint.toml
//! [gesture]
//! long_press_ms = 400
//!
//! [selection]
//! rng_seed = 42
//!
//! [defaults]
//! background_palette = 3
//! background_position = 4
//! auto_text_contrast = false
//! ```
//!
//! Every field has a default, so a partial (or empty) file is valid and
//! `EditorConfig::default()` is the stock editor.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tint_core::{BUILTIN_COUNT, PALETTE_LEN};
use web_time::Duration;

use crate::error::ConfigError;
use crate::gesture::DEFAULT_LONG_PRESS;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub gesture: GestureConfig,
    pub selection: SelectionConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Hold time in milliseconds before a menu press opens the shade grid.
    pub long_press_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: DEFAULT_LONG_PRESS.as_millis() as u64,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fixed seed for variation picks. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

/// The selection a fresh editor (or a failed restore) starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub background_palette: usize,
    pub background_position: usize,
    pub text_palette: usize,
    pub text_position: usize,
    /// Pick the text position with the best contrast against the default
    /// background instead of `text_position`.
    pub auto_text_contrast: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            background_palette: 0,
            background_position: 4,
            text_palette: 0,
            text_position: 6,
            auto_text_contrast: true,
        }
    }
}

impl EditorConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()
    }

    /// Load from a TOML file on disk and validate.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validation problems, one message each. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.gesture.long_press_ms == 0 {
            errors.push("gesture.long_press_ms must be > 0".into());
        }

        // Defaults may only name built-ins; customs do not exist yet.
        let d = &self.defaults;
        for (name, value, len) in [
            ("defaults.background_palette", d.background_palette, BUILTIN_COUNT),
            ("defaults.text_palette", d.text_palette, BUILTIN_COUNT),
            ("defaults.background_position", d.background_position, PALETTE_LEN),
            ("defaults.text_position", d.text_position, PALETTE_LEN),
        ] {
            if value >= len {
                errors.push(format!("{name} must be < {len}, got {value}"));
            }
        }

        errors
    }

    fn check(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
