//! Rendering for the show.
//!
//! Draws one frame from `ShowState` with ratatui and reports the clickable
//! regions it drew, bottom-most first, so mouse clicks can be hit-tested
//! against exactly what is on screen.

mod console;
mod help;
mod overlays;
mod splash;

pub use console::{console_lines, CURSOR_GLYPH};
pub use help::{render_help_modal, HELP_BINDINGS};
pub use overlays::{close_button_area, BUY_LABEL, CLOSE_LABEL, HACKED_BUY_LABEL};
pub use splash::{progress_bar, START_LABEL};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::show::state::{ClickTarget, ShowState, Stage};
use crate::tui::footer::render_footer;
use crate::tui::theme::current_theme;

/// Clickable regions drawn in one frame, bottom-most first.
pub type HitRegions = Vec<(Rect, ClickTarget)>;

pub const SECRET_LABEL: &str = "[ ACCESS MAINFRAME ]";

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("F1", "help"),
    ("F2", "access"),
    ("F5/F6", "speed"),
    ("F10", "quit"),
];

/// Draw the whole show.
pub fn render_show(frame: &mut Frame, show: &ShowState) -> HitRegions {
    let theme = current_theme();
    let area = frame.area();
    let mut regions = HitRegions::new();

    match show.stage() {
        Stage::Loading { .. } | Stage::Ready => {
            splash::render_splash(frame, area, show, &theme, &mut regions);
        }
        Stage::Running => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(area);

            render_header(frame, chunks[0], show, &mut regions);
            render_main_console(frame, chunks[1], show);
            render_footer(frame, chunks[2], FOOTER_KEYS);

            if show.alert().is_visible() {
                overlays::render_alert(frame, area, show, &theme, &mut regions);
            }
            if show.product().is_visible() {
                overlays::render_product(frame, area, show, &theme, &mut regions);
            }
            if show.console_overlay().is_visible() {
                overlays::render_product_console(frame, area, show, &theme, &mut regions);
            }
            for popup in show.popups() {
                if popup.overlay.is_visible() {
                    overlays::render_popup(frame, area, popup, &theme, &mut regions);
                }
            }
            if show.game_over().is_visible() {
                overlays::render_game_over(frame, area, show, &theme, &mut regions);
            }
        }
    }

    if show.show_help() {
        render_help_modal(frame, area);
    }

    regions
}

fn render_header(frame: &mut Frame, area: Rect, show: &ShowState, regions: &mut HitRegions) {
    let theme = current_theme();
    let style = if show.any_overlay_visible() {
        theme.backdrop_style()
    } else {
        theme.text_secondary_style()
    };
    let title = Line::from(vec![
        Span::styled("root@mainframe", theme.accent_style()),
        Span::styled(":~# ./hack --all", style),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    let width = (SECRET_LABEL.len() as u16).min(area.width);
    let button = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
    frame.render_widget(
        Paragraph::new(SECRET_LABEL).style(theme.accent_style().add_modifier(Modifier::BOLD)),
        button,
    );
    regions.push((button, ClickTarget::SecretButton));
}

fn render_main_console(frame: &mut Frame, area: Rect, show: &ShowState) {
    let theme = current_theme();
    let dimmed = show.any_overlay_visible();
    let (text_style, border_style) = if dimmed {
        (theme.backdrop_style(), theme.backdrop_style())
    } else {
        (theme.text_style(), theme.text_secondary_style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" kernel.c ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let console = show.main_console();
    let lines = console_lines(
        console.buffer.target().text(),
        console.cursor.is_visible(),
        inner.height as usize,
        text_style,
        if dimmed { text_style } else { theme.accent_style() },
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::audio::AudioLibrary;
    use crate::config::Config;
    use crate::engine::InputCode;
    use crate::show::preload::AssetPreloader;

    fn show() -> ShowState {
        ShowState::new(
            &Config::default(),
            "#include <linux/kernel.h>\nint hack(void);",
            AudioLibrary::muted(),
            AssetPreloader::ready(),
            SmallRng::seed_from_u64(1),
        )
    }

    fn draw(show: &ShowState) -> (String, HitRegions) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut regions = HitRegions::new();
        terminal
            .draw(|frame| regions = render_show(frame, show))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, regions)
    }

    fn running() -> ShowState {
        let mut show = show();
        show.advance(Duration::ZERO);
        show.advance(Duration::from_millis(2000));
        show.handle_key(InputCode::Confirm);
        show
    }

    #[test]
    fn loading_screen_shows_progress() {
        let (text, regions) = draw(&show());
        assert!(text.contains("loading"));
        assert!(regions.is_empty());
    }

    #[test]
    fn ready_screen_has_start_button() {
        let mut show = show();
        show.advance(Duration::ZERO);
        show.advance(Duration::from_millis(2000));
        let (text, regions) = draw(&show);
        assert!(text.contains(START_LABEL));
        assert!(regions.iter().any(|(_, t)| *t == ClickTarget::Start));
    }

    #[test]
    fn typed_source_appears_in_console() {
        let mut show = running();
        for _ in 0..5 {
            show.handle_key(InputCode::Printable('x'));
        }
        let (text, regions) = draw(&show);
        assert!(text.contains("#include"));
        assert!(!text.contains("kernel.h>"));
        assert!(regions.iter().any(|(_, t)| *t == ClickTarget::SecretButton));
    }

    #[test]
    fn product_overlay_registers_buy_and_close() {
        let mut show = running();
        show.click(ClickTarget::SecretButton);
        show.advance(Duration::from_millis(2000));

        let (text, regions) = draw(&show);
        assert!(text.contains(BUY_LABEL));
        let targets: Vec<_> = regions.iter().map(|(_, t)| *t).collect();
        assert!(targets.contains(&ClickTarget::BuyButton));
        assert!(targets.contains(&ClickTarget::Close(crate::show::state::PRODUCT)));
    }

    #[test]
    fn hit_regions_round_trip_through_state() {
        let mut show = running();
        show.click(ClickTarget::SecretButton);
        show.advance(Duration::from_millis(2000));
        let (_, regions) = draw(&show);
        let (buy_rect, _) = *regions
            .iter()
            .find(|(_, t)| *t == ClickTarget::BuyButton)
            .unwrap();

        show.set_hit_regions(regions);
        assert_eq!(
            show.target_at(buy_rect.x, buy_rect.y),
            Some(ClickTarget::BuyButton)
        );
    }

    #[test]
    fn game_over_has_no_close_button() {
        let mut show = running();
        show.click(ClickTarget::SecretButton);
        show.advance(Duration::from_millis(2000));
        show.click(ClickTarget::BuyButton);
        show.handle_key(InputCode::Confirm);
        show.advance(Duration::from_millis(1000));
        for _ in 0..10 {
            show.click(ClickTarget::BuyButton);
        }

        let (text, regions) = draw(&show);
        assert!(text.contains("GAME"));
        assert!(!regions
            .iter()
            .any(|(_, t)| *t == ClickTarget::Close(crate::show::state::GAME_OVER)));
    }

    #[test]
    fn hacked_buy_button_changes_label() {
        let mut show = running();
        show.click(ClickTarget::SecretButton);
        show.advance(Duration::from_millis(2000));
        show.click(ClickTarget::BuyButton);
        show.handle_key(InputCode::Confirm);
        show.advance(Duration::from_millis(1000));

        let (text, _) = draw(&show);
        assert!(text.contains(HACKED_BUY_LABEL));
        assert!(!text.contains(BUY_LABEL));
    }

    #[test]
    fn help_modal_is_drawn_on_top() {
        let mut show = running();
        show.toggle_help();
        let (text, _) = draw(&show);
        assert!(text.contains("Help"));
        assert!(text.contains("Press"));
    }
}
