use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

/// Font choice persisted under the `Font` group.
///
/// `height` follows the LOGFONT convention: a negative value is the
/// character height in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    #[serde(rename = "Font", default = "default_font_name")]
    pub name: String,

    #[serde(rename = "Height", default = "default_font_height")]
    pub height: i32,

    #[serde(rename = "Weight", default = "default_font_weight")]
    pub weight: i32,

    #[serde(rename = "Italic", default)]
    pub italic: bool,
}

pub const FONT_WEIGHT_NORMAL: i32 = 400;
pub const FONT_WEIGHT_BOLD: i32 = 700;

fn default_font_name() -> String {
    "Tahoma".to_string()
}

fn default_font_height() -> i32 {
    -27
}

fn default_font_weight() -> i32 {
    FONT_WEIGHT_NORMAL
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            name: default_font_name(),
            height: default_font_height(),
            weight: default_font_weight(),
            italic: false,
        }
    }
}

impl FontDescriptor {
    /// Rendered size in pixels.
    pub fn pixel_size(&self) -> i32 {
        self.height.saturating_abs().max(1)
    }

    /// Semibold and heavier render bold.
    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

/// Window placement persisted under the `Position` group.
///
/// `x`/`y` are `None` until the window has been placed once; the window
/// manager then chooses the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,

    #[serde(rename = "Width", default = "default_width")]
    pub width: i32,

    #[serde(rename = "Height", default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    640
}

fn default_height() -> i32 {
    480
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "Font", default)]
    pub font: FontDescriptor,

    #[serde(rename = "Position", default)]
    pub position: WindowGeometry,
}

/// Reads and writes [`AppSettings`] as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user config location.
    pub fn default_location() -> Self {
        Self::new(Self::get_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), "Failed to parse settings: {}. Using defaults.", e);
                    AppSettings::default()
                }
            },
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "No settings file ({}), using defaults", e);
                AppSettings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "Settings saved");

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("chosha");
        path.push("settings.json");
        path
    }
}
