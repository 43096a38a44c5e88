use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::file_filters::document_filter;

fn run_chooser(kind: FileDialogType, title: &str, confirm_overwrite: bool) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&document_filter());
    if confirm_overwrite {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open", false)
}

pub fn native_save_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save As", true)
}
