use fltk::{
    app,
    browser::HoldBrowser,
    button::{Button, CheckButton},
    dialog,
    enums::Align,
    frame::Frame,
    input::IntInput,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::run_dialog;
use crate::app::settings::{FONT_WEIGHT_BOLD, FONT_WEIGHT_NORMAL, FontDescriptor};
use crate::ui::fonts::font_families;

const MAX_FONT_SIZE: i32 = 400;

/// Build the dialog result, keeping the stored name and weight for the
/// parts the user left alone.
fn chosen_font(current: &FontDescriptor, family: Option<&str>, size: i32, bold: bool, italic: bool) -> FontDescriptor {
    let name = match family {
        Some(f) if !f.eq_ignore_ascii_case(&current.name) => f.to_string(),
        _ => current.name.clone(),
    };
    let weight = if bold == current.is_bold() {
        current.weight
    } else if bold {
        FONT_WEIGHT_BOLD
    } else {
        FONT_WEIGHT_NORMAL
    };

    FontDescriptor {
        name,
        height: -size,
        weight,
        italic,
    }
}

/// Show the font chooser and return the new font if the user clicked OK.
pub fn show_font_dialog(current: &FontDescriptor) -> Option<FontDescriptor> {
    let families = Rc::new(font_families(app::get_font_names()));

    let mut dialog = Window::default()
        .with_size(360, 350)
        .with_label("Font")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(15, 10)
        .with_size(330, 25)
        .with_label("Font:")
        .with_align(Align::Left | Align::Inside);
    let mut list = HoldBrowser::default().with_pos(15, 35).with_size(330, 200);
    for name in families.iter() {
        // "@." turns off FLTK's browser formatting codes for the line
        list.add(&format!("@.{}", name));
    }
    // A stored family missing from this system stays unselected
    if let Some(i) = families.iter().position(|f| f.eq_ignore_ascii_case(&current.name)) {
        list.select(i as i32 + 1);
    }

    Frame::default()
        .with_pos(15, 245)
        .with_size(50, 25)
        .with_label("Size:")
        .with_align(Align::Left | Align::Inside);
    let mut size_input = IntInput::default().with_pos(65, 245).with_size(70, 25);
    size_input.set_value(&current.pixel_size().to_string());

    let mut bold_check = CheckButton::default().with_pos(155, 245).with_size(80, 25).with_label("Bold");
    bold_check.set_value(current.is_bold());
    let mut italic_check = CheckButton::default().with_pos(245, 245).with_size(80, 25).with_label("Italic");
    italic_check.set_value(current.italic);

    let mut ok_btn = Button::default().with_pos(175, 305).with_size(80, 30).with_label("OK");
    let mut cancel_btn = Button::default().with_pos(265, 305).with_size(80, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    let families_ok = families.clone();
    let current_ok = current.clone();
    ok_btn.set_callback(move |_| {
        let size = match size_input.value().trim().parse::<i32>() {
            Ok(n) if (1..=MAX_FONT_SIZE).contains(&n) => n,
            _ => {
                dialog::message_default(&format!("Size must be between 1 and {}", MAX_FONT_SIZE));
                return;
            }
        };
        let family = usize::try_from(list.value() - 1)
            .ok()
            .and_then(|i| families_ok.get(i))
            .map(String::as_str);

        *result_ok.borrow_mut() = Some(chosen_font(
            &current_ok,
            family,
            size,
            bold_check.is_checked(),
            italic_check.is_checked(),
        ));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    run_dialog(&dialog);

    let chosen = result.borrow_mut().take();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tahoma_semibold() -> FontDescriptor {
        FontDescriptor { name: "Tahoma".into(), height: -27, weight: 600, italic: false }
    }

    #[test]
    fn test_size_only_change_keeps_missing_family_and_weight() {
        let current = tahoma_semibold();
        let font = chosen_font(&current, None, 14, true, false);
        assert_eq!(font.name, "Tahoma");
        assert_eq!(font.weight, 600);
        assert_eq!(font.height, -14);
    }

    #[test]
    fn test_same_family_keeps_stored_spelling() {
        let current = FontDescriptor { name: "courier".into(), ..FontDescriptor::default() };
        let font = chosen_font(&current, Some("Courier"), 12, false, false);
        assert_eq!(font.name, "courier");
    }

    #[test]
    fn test_picking_another_family_replaces_name() {
        let font = chosen_font(&tahoma_semibold(), Some("Times"), 27, true, true);
        assert_eq!(font.name, "Times");
        assert_eq!(font.weight, 600);
        assert!(font.italic);
    }

    #[test]
    fn test_toggling_bold_sets_standard_weight() {
        let current = tahoma_semibold();
        assert_eq!(chosen_font(&current, None, 27, false, false).weight, FONT_WEIGHT_NORMAL);

        let regular = FontDescriptor::default();
        assert_eq!(chosen_font(&regular, None, 27, true, false).weight, FONT_WEIGHT_BOLD);
    }
}
