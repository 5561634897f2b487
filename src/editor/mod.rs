//! Interactive editor session.
//!
//! A REPL-style document editor with slash commands for switching modes,
//! voices, styles, and locales.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{EditorSession, SessionSettings};
