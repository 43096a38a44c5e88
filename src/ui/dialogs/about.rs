use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::session::APP_NAME;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(320, 200)
        .with_label(&format!("About {}", APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 300, 180, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label(APP_NAME);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 36);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 22);

    let mut info_frame = Frame::default();
    info_frame.set_label("A tiny plain-text notepad\nBuilt with Rust and FLTK");
    info_frame.set_label_size(12);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("OK");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
