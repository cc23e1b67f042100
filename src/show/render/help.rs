//! Help overlay rendering.
//!
//! Displays a centered help modal with all key bindings.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::{current_theme, Theme};
use crate::tui::ui::centered_box;

/// Key bindings shown in the help modal: (key, description).
pub const HELP_BINDINGS: &[(&str, &str)] = &[
    ("any key", "Type some very real code"),
    ("Backspace", "Un-type it"),
    ("Enter", "Start / confirm"),
    ("F2", "Secret button"),
    ("F3", "Buy button"),
    ("Esc", "Close the top window"),
    ("F5 / F6", "Type faster / slower"),
    ("F1", "This help"),
    ("F10", "Quit"),
];

const HELP_WIDTH: u16 = 44;

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();

    let lines = build_help_text(&theme);
    let modal_area = centered_box(HELP_WIDTH, lines.len() as u16 + 2, area);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Keys", theme.text_secondary_style())),
        Line::from(""),
    ];
    for (key, desc) in HELP_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::raw(desc.to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}
