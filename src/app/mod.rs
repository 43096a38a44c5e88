//! Toolkit-independent core of the editor.
//!
//! - `session` / `settings` - the document session and what persists of it
//! - `controller` - session state machine over the text surface and stores
//! - `dispatch` - one handler for every `Message`, talking to a `Host`
//! - `file_store` - bounded whole-file I/O

pub mod controller;
pub mod dispatch;
pub mod error;
pub mod file_filters;
pub mod file_store;
pub mod messages;
pub mod session;
pub mod settings;
pub mod surface;
pub mod text_ops;

pub use controller::{CloseChoice, Controller, SaveOutcome};
pub use dispatch::{Flow, Host, dispatch};
pub use error::{AppError, Result};
pub use file_store::{DiskFileStore, FileStore, MAX_FILE_SIZE};
pub use messages::Message;
pub use session::{APP_NAME, Session, title_for};
pub use settings::{AppSettings, FontDescriptor, SettingsStore, WindowGeometry};
pub use surface::TextSurface;
