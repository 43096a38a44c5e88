use std::path::PathBuf;

use fltk::{dialog, prelude::*, window::Window};

use super::dialogs::about::show_about_dialog;
use super::dialogs::font::show_font_dialog;
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::app::controller::CloseChoice;
use crate::app::dispatch::Host;
use crate::app::error::AppError;
use crate::app::settings::{FontDescriptor, WindowGeometry};

/// `Host` backed by the FLTK main window and FLTK's modal dialogs.
pub struct FltkHost {
    window: Window,
    title: String,
}

impl FltkHost {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            title: String::new(),
        }
    }

    pub fn close(&mut self) {
        self.window.hide();
    }
}

impl Host for FltkHost {
    fn set_title(&mut self, title: &str) {
        // Called after every message, including each keystroke
        if self.title != title {
            self.window.set_label(title);
            self.title = title.to_string();
        }
    }

    fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            x: Some(self.window.x()),
            y: Some(self.window.y()),
            width: self.window.w(),
            height: self.window.h(),
        }
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        native_open_dialog()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        native_save_dialog()
    }

    fn pick_font(&mut self, current: &FontDescriptor) -> Option<FontDescriptor> {
        show_font_dialog(current)
    }

    fn confirm_discard(&mut self) -> CloseChoice {
        // Button 0 is also what Escape selects
        match dialog::choice2_default("You have unsaved changes.", "Cancel", "Quit Without Saving", "") {
            Some(1) => CloseChoice::Proceed,
            _ => CloseChoice::Cancel,
        }
    }

    fn report(&mut self, error: &AppError) {
        dialog::message_title(error.title());
        dialog::alert_default(&error.to_string());
    }

    fn show_about(&mut self) {
        show_about_dialog();
    }
}
