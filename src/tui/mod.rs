//! TUI (Text User Interface) module for hacktyper
//!
//! Terminal setup, theming and layout helpers shared by the show renderer
//! and the CLI commands.

pub mod footer;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use terminal::{setup_terminal, ShowTerminal, TerminalGuard};
pub use theme::{current_theme, Theme};
