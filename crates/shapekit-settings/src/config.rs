//! Editor configuration for ShapeKit
//!
//! Configuration is organized into logical sections:
//! - Serialization settings (number formatting of the textual path form)
//! - Editing settings (how drags propagate to neighbouring segments)
//!
//! Files may be JSON or TOML; the extension selects the format.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest number of decimals accepted for serialized coordinates
pub const MAX_PRECISION: usize = 12;

const CONFIG_FILE_NAME: &str = "shapekit.toml";

/// Serialization settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerializationSettings {
    /// Fixed number of decimals for coordinates in the `d` string,
    /// trailing zeros trimmed. `None` keeps the shortest exact form.
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Editing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditingSettings {
    /// Move the first control point of a following absolute cubic together
    /// with a dragged endpoint
    #[serde(default = "default_tangent_follow")]
    pub tangent_follow: bool,
}

fn default_tangent_follow() -> bool {
    true
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            tangent_follow: default_tangent_follow(),
        }
    }
}

/// Top-level editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub serialization: SerializationSettings,
    #[serde(default)]
    pub editing: EditingSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/shapekit/shapekit.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shapekit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if let Some(precision) = self.serialization.precision {
            if precision > MAX_PRECISION {
                return Err(SettingsError::invalid(
                    "serialization.precision",
                    format!("must be <= {}, got {}", MAX_PRECISION, precision),
                ));
            }
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
