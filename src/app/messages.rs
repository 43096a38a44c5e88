/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; `dispatch` handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExit,
    WindowClose,

    // Edit
    EditUndo,
    EditCut,
    EditCopy,
    EditPaste,
    EditDelete,
    SelectAll,

    // Format
    FormatFont,

    // Help
    ShowAbout,

    /// The text surface reported a user edit.
    TextChanged,
}
