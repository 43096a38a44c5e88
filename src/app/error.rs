use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not open the specified file ({path}): {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The file {path} is too large to open (limit is {limit} bytes)")]
    FileTooLarge { path: PathBuf, limit: u64 },

    #[error("Could not save the file ({path}): {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    #[error("Could not create the main window: {0}")]
    WindowSetup(String),
}

impl AppError {
    /// Caption for the modal notification showing this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FileOpen { .. } | Self::FileTooLarge { .. } => "Error opening file",
            Self::FileWrite { .. } => "Error saving file",
            Self::Allocation { .. } => "Error allocating memory",
            Self::Io(_) | Self::Json(_) | Self::WindowSetup(_) => "Error",
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
