//! FLTK front end: the window, menus, dialogs and the widget-backed
//! implementations of `TextSurface` and `Host`.

pub mod dialogs;
pub mod file_dialogs;
pub mod fonts;
pub mod host;
pub mod main_window;
pub mod menu;
pub mod surface;
