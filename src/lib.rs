//! Chosha - a tiny plain-text notepad.
//!
//! `app` holds the toolkit-independent core (session state, controller,
//! dispatch, file and settings persistence). `ui` wires that core to FLTK.

pub mod app;
pub mod ui;
