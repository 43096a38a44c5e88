/// A named pattern shown in the file chooser's type list.
pub struct FileFilter {
    pub description: &'static str,
    pub pattern: &'static str,
}

pub const TEXT_FILES: FileFilter = FileFilter {
    description: "Text Files (*.txt)",
    pattern: "*.txt",
};

pub const ALL_FILES: FileFilter = FileFilter {
    description: "All Files (*.*)",
    pattern: "*",
};

/// Build the filter string for the native chooser.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
pub fn chooser_filter(filters: &[FileFilter]) -> String {
    filters
        .iter()
        .map(|f| format!("{}\t{}", f.description, f.pattern))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Filters used by both the Open and Save As dialogs.
pub fn document_filter() -> String {
    chooser_filter(&[TEXT_FILES, ALL_FILES])
}
