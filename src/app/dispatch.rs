//! The single event handler: every `Message` from the window ends up here.

use std::path::PathBuf;

use super::controller::{CloseChoice, Controller, SaveOutcome};
use super::error::AppError;
use super::file_store::FileStore;
use super::messages::Message;
use super::settings::{FontDescriptor, WindowGeometry};
use super::surface::TextSurface;

/// The window shell around the controller: title, geometry and modal dialogs.
pub trait Host {
    fn set_title(&mut self, title: &str);
    fn geometry(&self) -> WindowGeometry;

    fn pick_open_path(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self) -> Option<PathBuf>;
    fn pick_font(&mut self, current: &FontDescriptor) -> Option<FontDescriptor>;
    fn confirm_discard(&mut self) -> CloseChoice;

    fn report(&mut self, error: &AppError);
    fn show_about(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn dispatch<S, F, H>(ctl: &mut Controller<S, F>, host: &mut H, msg: Message) -> Flow
where
    S: TextSurface,
    F: FileStore,
    H: Host,
{
    tracing::trace!(?msg, "dispatch");
    match msg {
        Message::FileNew => ctl.new_document(),
        Message::FileOpen => {
            if let Some(path) = host.pick_open_path() {
                if let Err(e) = ctl.open(&path) {
                    tracing::warn!("{}", e);
                    host.report(&e);
                }
            }
        }
        Message::FileSave => match ctl.save() {
            Ok(SaveOutcome::Saved) => {}
            Ok(SaveOutcome::NeedsPath) => save_as(ctl, host),
            Err(e) => {
                tracing::warn!("{}", e);
                host.report(&e);
            }
        },
        Message::FileSaveAs => save_as(ctl, host),
        Message::FileExit | Message::WindowClose => {
            let geometry = host.geometry();
            if ctl.request_close(geometry, || host.confirm_discard()) {
                return Flow::Exit;
            }
        }

        Message::EditUndo => ctl.surface_mut().undo(),
        Message::EditCut => ctl.surface_mut().cut(),
        Message::EditCopy => ctl.surface_mut().copy(),
        Message::EditPaste => ctl.surface_mut().paste(),
        Message::EditDelete => ctl.surface_mut().replace_selection(""),
        Message::SelectAll => ctl.surface_mut().select_all(),

        Message::FormatFont => {
            if let Some(font) = host.pick_font(&ctl.session().font) {
                tracing::debug!(?font, "Font changed");
                ctl.set_font(font);
            }
        }
        Message::ShowAbout => host.show_about(),

        Message::TextChanged => ctl.notify_changed(),
    }

    host.set_title(&ctl.title());
    Flow::Continue
}

fn save_as<S: TextSurface, F: FileStore, H: Host>(ctl: &mut Controller<S, F>, host: &mut H) {
    let Some(path) = host.pick_save_path() else {
        return;
    };
    if let Err(e) = ctl.save_as(&path) {
        tracing::warn!("{}", e);
        host.report(&e);
    }
}
