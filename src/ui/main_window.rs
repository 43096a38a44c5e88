use fltk::{
    app::{self, Sender},
    enums::Event,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::menu::build_menu;
use crate::app::error::{AppError, Result};
use crate::app::messages::Message;
use crate::app::settings::WindowGeometry;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(geometry: &WindowGeometry, sender: &Sender<Message>) -> Result<MainWidgets> {
    if app::screen_count() < 1 {
        return Err(AppError::WindowSetup("no screen available".to_string()));
    }

    let (w, h) = (geometry.width.max(200), geometry.height.max(150));
    let mut wind = match (geometry.x, geometry.y) {
        (Some(x), Some(y)) => Window::new(x, y, w, h, None),
        // No saved position yet: let the window appear centred
        _ => Window::default().with_size(w, h).center_screen(),
    };
    wind.set_xclass("Chosha");
    wind.size_range(200, 150, 0, 0);

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);
    build_menu(&mut menu, sender);

    let text_editor = TextEditor::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // The window manager's close button goes through the unsaved-changes
    // check instead of hiding the window directly. Escape is ignored.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    Ok(MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
    })
}
