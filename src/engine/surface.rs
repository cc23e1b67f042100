//! Render targets.
//!
//! The engine never draws anything itself. Components push visibility and
//! text into a `RenderTarget`; the TUI reads the in-memory `Surface`
//! implementation when it draws a frame.

/// Non-breaking space used for revealed spaces.
pub const NBSP: char = '\u{00A0}';

/// Something the engine can show, hide, and fill with text.
pub trait RenderTarget {
    fn set_visible(&mut self, visible: bool);

    /// Replace the target's text.
    ///
    /// `already_escaped` tells the target whether `text` went through
    /// [`escape_for_display`]. Targets must escape unescaped text
    /// themselves before showing it.
    fn set_text(&mut self, text: &str, already_escaped: bool);
}

/// In-memory render target drawn by the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    visible: bool,
    text: String,
}

impl Surface {
    /// A hidden, empty surface.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// A visible, empty surface.
    pub fn shown() -> Self {
        Self {
            visible: true,
            text: String::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Escaped display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display text split into lines for drawing.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl RenderTarget for Surface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_text(&mut self, text: &str, already_escaped: bool) {
        self.text = if already_escaped {
            text.to_string()
        } else {
            escape_for_display(text)
        };
    }
}

/// Escape text for display in the terminal.
///
/// Exactly two substitutions are visible: spaces become non-breaking
/// spaces and newlines stay line breaks. Every other control character is
/// replaced with caret notation (`^[` for ESC) so source text can never
/// drive the terminal.
pub fn escape_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push(NBSP),
            '\n' => out.push('\n'),
            c if (c as u32) < 0x20 => {
                out.push('^');
                out.push(char::from(b'@' + c as u8));
            }
            '\u{7f}' => out.push_str("^?"),
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}
