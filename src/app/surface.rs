use super::settings::FontDescriptor;

/// The editable text widget.
///
/// Selection, undo history, scrolling and the clipboard belong to the widget;
/// the controller only forwards the editing commands.
pub trait TextSurface {
    fn text(&self) -> String;

    /// Replace the whole content. Must not be reported back as a user edit.
    fn set_text(&mut self, text: &str);

    fn replace_selection(&mut self, text: &str);

    /// Content length in bytes.
    fn length(&self) -> usize;

    fn set_font(&mut self, font: &FontDescriptor);

    fn undo(&mut self);
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
    fn select_all(&mut self);
}
