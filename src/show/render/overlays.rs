//! Overlay window rendering.
//!
//! Every overlay is a bordered box cleared over the console. Closable
//! overlays get a `[x]` in the top border, recorded as a click target.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::console::console_lines;
use super::HitRegions;
use crate::engine::{OverlaySequencer, Surface};
use crate::show::state::{ClickTarget, Popup, ShowAction, ShowState, POPUP_WIDTH};
use crate::tui::theme::Theme;
use crate::tui::ui::{centered_box, placed_box};

pub const CLOSE_LABEL: &str = "[x]";
pub const BUY_LABEL: &str = "[ BUY NOW ]";
pub const HACKED_BUY_LABEL: &str = "[ BUY FOR $0 ]";

const POPUP_HEIGHT: u16 = 5;

/// Region of the `[x]` button for an overlay drawn in `area`.
pub fn close_button_area(area: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(
        area.right().saturating_sub(width + 1),
        area.y,
        width.min(area.width),
        1,
    )
}

/// Clear `area` and draw the overlay border. Returns the inner area.
fn overlay_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border: Style,
    overlay: &OverlaySequencer<ShowAction>,
    regions: &mut HitRegions,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if overlay.is_closable() && area.width > CLOSE_LABEL.len() as u16 + 2 {
        let button = close_button_area(area);
        frame.render_widget(Paragraph::new(CLOSE_LABEL).style(border), button);
        regions.push((button, ClickTarget::Close(overlay.id())));
    }
    inner
}

fn text_lines(surface: &Surface, style: Style) -> Vec<Line<'static>> {
    surface
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect()
}

pub fn render_alert(frame: &mut Frame, area: Rect, show: &ShowState, theme: &Theme, regions: &mut HitRegions) {
    let alert = show.alert();
    let lines = text_lines(alert.surface(), theme.error_style().add_modifier(Modifier::BOLD));
    let box_area = centered_box(44, lines.len() as u16 + 4, area);
    let inner = overlay_frame(frame, box_area, "ALERT", theme.error_style(), alert, regions);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        padded(inner),
    );
}

pub fn render_product(frame: &mut Frame, area: Rect, show: &ShowState, theme: &Theme, regions: &mut HitRegions) {
    let product = show.product();
    let mut lines = text_lines(product.surface(), theme.text_style());
    lines.push(Line::from(""));
    let box_area = centered_box(50, lines.len() as u16 + 5, area);
    let inner = overlay_frame(frame, box_area, "SHOP", theme.accent_style(), product, regions);
    let content = padded(inner);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );

    let (label, style) = if show.is_buy_hacked() {
        (
            HACKED_BUY_LABEL,
            theme
                .accent_bold_style()
                .add_modifier(Modifier::SLOW_BLINK | Modifier::REVERSED),
        )
    } else {
        (BUY_LABEL, theme.accent_bold_style())
    };
    let width = (label.len() as u16).min(content.width);
    let button = Rect::new(
        content.x + (content.width - width) / 2,
        content.bottom().saturating_sub(1),
        width,
        1,
    );
    frame.render_widget(Paragraph::new(label).style(style), button);
    regions.push((button, ClickTarget::BuyButton));
}

pub fn render_product_console(
    frame: &mut Frame,
    area: Rect,
    show: &ShowState,
    theme: &Theme,
    regions: &mut HitRegions,
) {
    let overlay = show.console_overlay();
    let console = show.product_console();
    let box_area = centered_box(area.width.saturating_sub(8).min(72), 14, area);
    let inner = overlay_frame(frame, box_area, "checkout.exe", theme.accent_style(), overlay, regions);

    let lines = console_lines(
        console.buffer.target().text(),
        console.cursor.is_visible(),
        inner.height.saturating_sub(1) as usize,
        theme.text_style(),
        theme.accent_style(),
    );
    frame.render_widget(Paragraph::new(lines), inner);

    let hint = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, inner.height.min(1));
    frame.render_widget(
        Paragraph::new("Enter: hack the buy button").style(theme.text_secondary_style()),
        hint,
    );
}

pub fn render_popup(frame: &mut Frame, area: Rect, popup: &Popup, theme: &Theme, regions: &mut HitRegions) {
    let box_area = placed_box(
        popup.placement.left,
        popup.placement.top,
        POPUP_WIDTH,
        POPUP_HEIGHT,
        area,
    );
    let title = format!("GAME OVER #{}", popup.attempt);
    let inner = overlay_frame(frame, box_area, &title, theme.error_style(), &popup.overlay, regions);
    frame.render_widget(
        Paragraph::new(text_lines(popup.overlay.surface(), theme.text_style()))
            .wrap(Wrap { trim: true }),
        padded(inner),
    );
}

pub fn render_game_over(frame: &mut Frame, area: Rect, show: &ShowState, theme: &Theme, regions: &mut HitRegions) {
    let overlay = show.game_over();
    let style = theme.error_style().add_modifier(Modifier::BOLD);
    let lines = text_lines(overlay.surface(), style);
    let box_area = centered_box(50, lines.len() as u16 + 4, area);
    let inner = overlay_frame(frame, box_area, "GAME OVER", style, overlay, regions);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        padded(inner),
    );
}

/// One cell of horizontal padding and one row on top.
fn padded(inner: Rect) -> Rect {
    Rect::new(
        inner.x.saturating_add(1),
        inner.y.saturating_add(1),
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_button_sits_in_top_border() {
        let area = Rect::new(10, 5, 40, 8);
        assert_eq!(close_button_area(area), Rect::new(46, 5, 3, 1));
    }

    #[test]
    fn padding_never_underflows() {
        assert_eq!(padded(Rect::new(0, 0, 1, 0)), Rect::new(1, 1, 0, 0));
    }
}
