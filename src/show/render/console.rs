//! Console text rendering.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Block cursor glyph.
pub const CURSOR_GLYPH: &str = "\u{2588}";

/// Lines for a console showing the tail of `text`.
///
/// Only the last `height` lines are kept so the newest output stays in
/// view. The cursor glyph follows the last character when visible, and a
/// blank cell takes its place otherwise so the line does not jump.
pub fn console_lines(
    text: &str,
    cursor_visible: bool,
    height: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Line<'static>> {
    if height == 0 {
        return Vec::new();
    }

    let all: Vec<&str> = text.split('\n').collect();
    let start = all.len().saturating_sub(height);
    let last = all.len() - 1;

    all[start..]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut spans = vec![Span::styled(line.to_string(), text_style)];
            if start + i == last {
                let glyph = if cursor_visible { CURSOR_GLYPH } else { " " };
                spans.push(Span::styled(glyph, cursor_style));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn cursor_follows_last_line() {
        let lines = console_lines("ab\ncd", true, 10, Style::default(), Style::default());
        assert_eq!(plain(&lines), vec!["ab".to_string(), format!("cd{}", CURSOR_GLYPH)]);
    }

    #[test]
    fn hidden_cursor_keeps_width() {
        let lines = console_lines("ab", false, 10, Style::default(), Style::default());
        assert_eq!(plain(&lines), vec!["ab ".to_string()]);
    }

    #[test]
    fn only_tail_is_kept() {
        let lines = console_lines("1\n2\n3\n4", false, 2, Style::default(), Style::default());
        assert_eq!(plain(&lines), vec!["3".to_string(), "4 ".to_string()]);
    }

    #[test]
    fn empty_text_still_shows_cursor() {
        let lines = console_lines("", true, 3, Style::default(), Style::default());
        assert_eq!(plain(&lines), vec![CURSOR_GLYPH.to_string()]);
    }

    #[test]
    fn zero_height_is_empty() {
        assert!(console_lines("abc", true, 0, Style::default(), Style::default()).is_empty());
    }
}
