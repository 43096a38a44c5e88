use fltk::{app, enums::Font};

use crate::app::settings::FontDescriptor;

/// FLTK's built-in font families; each has bold/italic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Helvetica,
    Courier,
    Times,
    Screen,
}

impl Family {
    pub const ALL: [Family; 4] = [Self::Helvetica, Self::Courier, Self::Times, Self::Screen];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::Courier => "Courier",
            Self::Times => "Times",
            Self::Screen => "Screen",
        }
    }

    /// Map a stored family name (including common desktop names) onto a
    /// built-in family.
    pub fn from_name(name: &str) -> Option<Family> {
        match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "arial" | "sans" | "sans-serif" => Some(Self::Helvetica),
            "courier" | "courier new" | "monospace" => Some(Self::Courier),
            "times" | "times new roman" | "serif" => Some(Self::Times),
            "screen" | "fixed" => Some(Self::Screen),
            _ => None,
        }
    }

    pub fn styled(&self, bold: bool, italic: bool) -> Font {
        match (self, bold, italic) {
            (Self::Helvetica, false, false) => Font::Helvetica,
            (Self::Helvetica, true, false) => Font::HelveticaBold,
            (Self::Helvetica, false, true) => Font::HelveticaItalic,
            (Self::Helvetica, true, true) => Font::HelveticaBoldItalic,
            (Self::Courier, false, false) => Font::Courier,
            (Self::Courier, true, false) => Font::CourierBold,
            (Self::Courier, false, true) => Font::CourierItalic,
            (Self::Courier, true, true) => Font::CourierBoldItalic,
            (Self::Times, false, false) => Font::Times,
            (Self::Times, true, false) => Font::TimesBold,
            (Self::Times, false, true) => Font::TimesItalic,
            (Self::Times, true, true) => Font::TimesBoldItalic,
            // Screen has no italic face
            (Self::Screen, false, _) => Font::Screen,
            (Self::Screen, true, _) => Font::ScreenBold,
        }
    }
}

/// Pick the FLTK font for a descriptor.
///
/// Built-in families honour weight and italic. Other names are looked up
/// among the system fonts loaded at startup, with their regular face; unknown
/// names fall back to Helvetica.
pub fn resolve_font(desc: &FontDescriptor) -> Font {
    if let Some(family) = Family::from_name(&desc.name) {
        return family.styled(desc.is_bold(), desc.italic);
    }
    let loaded = app::get_font_names();
    if loaded.iter().any(|n| n == &desc.name) {
        return Font::by_name(&desc.name);
    }
    tracing::debug!(name = %desc.name, "Font not available, using Helvetica");
    Family::Helvetica.styled(desc.is_bold(), desc.italic)
}

/// Families offered by the font dialog: built-ins first, then the loaded
/// system fonts sorted and without duplicates.
pub fn font_families(system: Vec<String>) -> Vec<String> {
    let mut families: Vec<String> = Family::ALL.iter().map(|f| f.display_name().to_string()).collect();
    let mut extra: Vec<String> = system
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty() && Family::from_name(n).is_none())
        .collect();
    extra.sort_by_key(|n| n.to_lowercase());
    extra.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    families.extend(extra);
    families
}
