use std::path::{Path, PathBuf};

use super::settings::{AppSettings, FontDescriptor, WindowGeometry};
use super::text_ops::extract_filename;

pub const APP_NAME: &str = "Chosha";

/// In-memory state of the open document and its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// `None` while the document is untitled.
    pub file_path: Option<PathBuf>,
    /// Set by edits, cleared by a successful open, save or new.
    pub dirty: bool,
    pub font: FontDescriptor,
    pub geometry: WindowGeometry,
}

impl Session {
    /// Fresh untitled session using the persisted font and geometry.
    pub fn from_settings(settings: AppSettings) -> Self {
        Self {
            file_path: None,
            dirty: false,
            font: settings.font,
            geometry: settings.position,
        }
    }

    /// The part of the session that outlives the process.
    pub fn to_settings(&self) -> AppSettings {
        AppSettings {
            font: self.font.clone(),
            position: self.geometry,
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.file_path.is_none()
    }

    pub fn title(&self) -> String {
        title_for(self.file_path.as_deref(), self.dirty)
    }
}

/// Window title for a document: `*name - Chosha` when dirty.
pub fn title_for(path: Option<&Path>, dirty: bool) -> String {
    let prefix = if dirty { "*" } else { "" };
    let name = match path {
        Some(p) => extract_filename(p),
        None => "Untitled".to_string(),
    };
    format!("{}{} - {}", prefix, name, APP_NAME)
}
