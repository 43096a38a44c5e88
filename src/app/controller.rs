use std::path::Path;

use super::error::{AppError, Result};
use super::file_store::FileStore;
use super::session::Session;
use super::settings::{AppSettings, FontDescriptor, SettingsStore, WindowGeometry};
use super::surface::TextSurface;
use super::text_ops::decode_text;

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Proceed,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Untitled document: nothing was written, ask the user for a path.
    NeedsPath,
}

/// Owns the session and mediates between commands and the collaborators.
pub struct Controller<S, F> {
    session: Session,
    surface: S,
    files: F,
    settings: SettingsStore,
}

impl<S: TextSurface, F: FileStore> Controller<S, F> {
    /// Start an untitled session from the persisted settings.
    pub fn new(surface: S, files: F, settings: SettingsStore) -> Self {
        let initial = settings.load();
        Self::with_settings(surface, files, settings, initial)
    }

    /// Like `new`, with settings the caller has already loaded from `settings`.
    pub fn with_settings(mut surface: S, files: F, settings: SettingsStore, initial: AppSettings) -> Self {
        let session = Session::from_settings(initial);
        surface.set_font(&session.font);
        Self {
            session,
            surface,
            files,
            settings,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn title(&self) -> String {
        self.session.title()
    }

    pub fn new_document(&mut self) {
        self.surface.set_text("");
        self.session.file_path = None;
        self.session.dirty = false;
    }

    /// Load `path` into the surface. On error nothing changes.
    ///
    /// Text with NUL characters is refused: the editor buffer is
    /// NUL-terminated and would silently drop everything after the first one.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let bytes = self.files.read(path)?;
        let text = decode_text(&bytes);
        if text.contains('\0') {
            return Err(AppError::FileOpen {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "file contains NUL characters"),
            });
        }

        self.surface.set_text(&text);
        self.session.file_path = Some(path.to_path_buf());
        self.session.dirty = false;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Opened file");
        Ok(())
    }

    /// Save to the current path, if there is one.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        match self.session.file_path.clone() {
            Some(path) => {
                self.save_as(&path)?;
                Ok(SaveOutcome::Saved)
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Write the surface content to `path` and make it the current file.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        let text = self.surface.text();
        self.files.write(path, text.as_bytes())?;

        self.session.file_path = Some(path.to_path_buf());
        self.session.dirty = false;

        tracing::info!(path = %path.display(), bytes = self.surface.length(), "Saved file");
        Ok(())
    }

    pub fn notify_changed(&mut self) {
        self.session.dirty = true;
    }

    pub fn set_font(&mut self, font: FontDescriptor) {
        self.surface.set_font(&font);
        self.session.font = font;
    }

    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.session.geometry = geometry;
    }

    /// Handle a close request. Returns `true` if the app should exit.
    ///
    /// `confirm` is only asked when there are unsaved changes. On cancel the
    /// session is left exactly as it was; otherwise `geometry` is recorded
    /// and the settings are persisted.
    pub fn request_close(
        &mut self,
        geometry: WindowGeometry,
        confirm: impl FnOnce() -> CloseChoice,
    ) -> bool {
        if self.session.dirty && confirm() == CloseChoice::Cancel {
            tracing::debug!("Close cancelled");
            return false;
        }

        self.set_geometry(geometry);
        if let Err(e) = self.settings.save(&self.session.to_settings()) {
            tracing::warn!(path = %self.settings.path().display(), "Failed to save settings: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Default)]
    struct FakeSurface {
        text: String,
        font: Option<FontDescriptor>,
    }

    impl TextSurface for FakeSurface {
        fn text(&self) -> String {
            self.text.clone()
        }
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
        fn replace_selection(&mut self, text: &str) {
            self.text.push_str(text);
        }
        fn length(&self) -> usize {
            self.text.len()
        }
        fn set_font(&mut self, font: &FontDescriptor) {
            self.font = Some(font.clone());
        }
        fn undo(&mut self) {}
        fn cut(&mut self) {}
        fn copy(&mut self) {}
        fn paste(&mut self) {}
        fn select_all(&mut self) {}
    }

    #[derive(Default)]
    struct MemoryFiles {
        files: HashMap<PathBuf, Vec<u8>>,
        fail_writes: bool,
    }

    impl FileStore for MemoryFiles {
        fn read(&mut self, path: &Path) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| AppError::FileOpen {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
        fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(AppError::FileWrite {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                });
            }
            self.files.insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }
    }

    fn controller(dir: &tempfile::TempDir) -> Controller<FakeSurface, MemoryFiles> {
        let store = SettingsStore::new(dir.path().join("settings.json"));
        Controller::new(FakeSurface::default(), MemoryFiles::default(), store)
    }

    #[test]
    fn test_new_applies_persisted_font() {
        let dir = tempfile::tempdir().unwrap();
        let ctl = controller(&dir);
        assert_eq!(ctl.surface().font, Some(FontDescriptor::default()));
        assert_eq!(ctl.title(), "Untitled - Chosha");
    }

    #[test]
    fn test_open_sets_path_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.files.files.insert("a.txt".into(), b"alpha".to_vec());
        ctl.notify_changed();

        ctl.open(Path::new("a.txt")).unwrap();
        assert_eq!(ctl.session().file_path.as_deref(), Some(Path::new("a.txt")));
        assert!(!ctl.session().dirty);
        assert_eq!(ctl.surface().text, "alpha");
        assert_eq!(ctl.title(), "a.txt - Chosha");
    }

    #[test]
    fn test_failed_open_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.files.files.insert("a.txt".into(), b"alpha".to_vec());
        ctl.open(Path::new("a.txt")).unwrap();
        ctl.notify_changed();
        let before = ctl.session().clone();

        let err = ctl.open(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::FileOpen { .. }));
        assert_eq!(ctl.session(), &before);
        assert_eq!(ctl.surface().text, "alpha");
    }

    #[test]
    fn test_open_refuses_text_with_nul() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.files.files.insert("a.txt".into(), b"alpha".to_vec());
        ctl.files.files.insert("bin.dat".into(), b"abc\0def".to_vec());
        ctl.open(Path::new("a.txt")).unwrap();
        let before = ctl.session().clone();

        let err = ctl.open(Path::new("bin.dat")).unwrap_err();
        match err {
            AppError::FileOpen { path, source } => {
                assert_eq!(path, Path::new("bin.dat"));
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ctl.session(), &before);
        assert_eq!(ctl.surface().text, "alpha");
    }

    #[test]
    fn test_save_untitled_needs_path_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.surface_mut().set_text("draft");
        ctl.notify_changed();

        assert_eq!(ctl.save().unwrap(), SaveOutcome::NeedsPath);
        assert!(ctl.files.files.is_empty());
        assert!(ctl.session().dirty);
        assert!(ctl.session().is_untitled());
    }

    #[test]
    fn test_save_as_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.surface_mut().set_text("draft");
        ctl.notify_changed();

        ctl.save_as(Path::new("out.txt")).unwrap();
        assert_eq!(ctl.files.files[Path::new("out.txt")], b"draft");
        assert!(!ctl.session().dirty);

        ctl.surface_mut().set_text("draft 2");
        ctl.notify_changed();
        assert_eq!(ctl.save().unwrap(), SaveOutcome::Saved);
        assert_eq!(ctl.files.files[Path::new("out.txt")], b"draft 2");
        assert_eq!(ctl.session().file_path.as_deref(), Some(Path::new("out.txt")));
        assert!(!ctl.session().dirty);
    }

    #[test]
    fn test_failed_save_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.notify_changed();
        ctl.files.fail_writes = true;
        let before = ctl.session().clone();

        assert!(ctl.save_as(Path::new("out.txt")).is_err());
        assert_eq!(ctl.session(), &before);
    }

    #[test]
    fn test_new_document_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.files.files.insert("a.txt".into(), b"alpha".to_vec());
        ctl.open(Path::new("a.txt")).unwrap();
        ctl.notify_changed();

        ctl.new_document();
        assert!(ctl.session().is_untitled());
        assert!(!ctl.session().dirty);
        assert_eq!(ctl.surface().text, "");
    }

    #[test]
    fn test_set_font_reaches_surface() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        let font = FontDescriptor { name: "Courier".into(), height: -12, weight: 700, italic: true };

        ctl.set_font(font.clone());
        assert_eq!(ctl.session().font, font);
        assert_eq!(ctl.surface().font, Some(font));
    }

    #[test]
    fn test_clean_close_skips_prompt_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        let geometry = WindowGeometry { x: Some(5), y: Some(6), width: 700, height: 500 };

        let exit = ctl.request_close(geometry, || panic!("no prompt expected"));
        assert!(exit);
        assert_eq!(ctl.session().geometry, geometry);
        let saved = SettingsStore::new(dir.path().join("settings.json")).load();
        assert_eq!(saved.position, geometry);
    }

    #[test]
    fn test_dirty_close_cancel_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.notify_changed();
        let before = ctl.session().clone();

        let geometry = WindowGeometry { x: Some(1), y: Some(2), width: 3, height: 4 };
        assert!(!ctl.request_close(geometry, || CloseChoice::Cancel));
        assert_eq!(ctl.session(), &before);
        assert!(!dir.path().join("settings.json").exists());
    }

    #[test]
    fn test_dirty_close_proceed_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);
        ctl.notify_changed();

        assert!(ctl.request_close(WindowGeometry::default(), || CloseChoice::Proceed));
        assert!(dir.path().join("settings.json").exists());
    }
}
