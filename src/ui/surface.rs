use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use super::fonts::resolve_font;
use crate::app::messages::Message;
use crate::app::settings::FontDescriptor;
use crate::app::surface::TextSurface;

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` copies the `malloc()`'d string returned by
/// `Fl_Text_Buffer_text()` into a `String` but never frees the original, so
/// every call leaks the full buffer size.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer. `Fl_Text_Buffer_text`
    // returns a malloc'd, null-terminated copy (or null), which is copied into
    // a Rust String and then released with the matching `free`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Whether a buffer modification should be reported as a user edit.
///
/// Restyle-only notifications and text replaced by the controller are not edits.
pub fn is_user_edit(inserted: i32, deleted: i32, replacing: bool) -> bool {
    (inserted > 0 || deleted > 0) && !replacing
}

/// `TextSurface` over an FLTK `TextEditor` and its buffer.
pub struct FltkSurface {
    editor: TextEditor,
    buffer: TextBuffer,
    /// Set while the controller replaces the text, so the modify callback
    /// does not report it as an edit.
    replacing: Rc<Cell<bool>>,
}

impl FltkSurface {
    pub fn new(mut editor: TextEditor, sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let replacing = Rc::new(Cell::new(false));

        let flag = replacing.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if is_user_edit(inserted, deleted, flag.get()) {
                sender.send(Message::TextChanged);
            }
        });
        editor.set_buffer(buffer.clone());

        Self {
            editor,
            buffer,
            replacing,
        }
    }
}

impl TextSurface for FltkSurface {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.replacing.set(true);
        self.buffer.set_text(text);
        self.replacing.set(false);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn replace_selection(&mut self, text: &str) {
        self.buffer.replace_selection(text);
    }

    fn length(&self) -> usize {
        self.buffer.length().max(0) as usize
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.editor.set_text_font(resolve_font(font));
        self.editor.set_text_size(font.pixel_size());
        self.editor.redraw();
    }

    fn undo(&mut self) {
        self.editor.undo();
    }

    fn cut(&mut self) {
        self.editor.cut();
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }

    fn select_all(&mut self) {
        let len = self.buffer.length();
        self.buffer.select(0, len);
        let _ = self.editor.take_focus();
    }
}
