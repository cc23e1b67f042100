//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Console text color
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for borders, buttons and key hints
    pub accent: Color,
    /// Alert and game-over color
    pub error: Color,
    /// Text color behind an open overlay
    pub backdrop: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}

/// Names accepted by [`theme_by_name`].
pub const THEME_NAMES: &[&str] = &["matrix", "classic", "amber"];

impl Theme {
    /// Green-on-black hacker console.
    pub fn matrix() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            backdrop: Color::DarkGray,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            backdrop: Color::DarkGray,
        }
    }

    /// Amber monochrome monitor.
    pub fn amber() -> Self {
        Self {
            text_primary: Color::Yellow,
            text_secondary: Color::DarkGray,
            accent: Color::LightYellow,
            error: Color::LightRed,
            backdrop: Color::DarkGray,
        }
    }

    // Style helpers

    /// Style for console text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, buttons).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for everything behind an open overlay.
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .fg(self.backdrop)
            .add_modifier(Modifier::DIM)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Look up a theme by its config name.
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name.to_ascii_lowercase().as_str() {
        "matrix" => Some(Theme::matrix()),
        "classic" => Some(Theme::classic()),
        "amber" => Some(Theme::amber()),
        _ => None,
    }
}

static ACTIVE_THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process-wide theme. Only the first call has an effect.
pub fn set_theme(theme: Theme) {
    let _ = ACTIVE_THEME.set(theme);
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    ACTIVE_THEME.get().cloned().unwrap_or_default()
}
