//! Mouse input handling for the show.
//!
//! Left clicks are hit-tested against the regions recorded by the last
//! frame; the topmost region under the pointer wins.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::show::state::{InputResult, ShowState};

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, show: &mut ShowState) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if show.show_help() {
            show.toggle_help();
        } else if let Some(target) = show.target_at(mouse.column, mouse.row) {
            tracing::debug!(?target, "click");
            show.click(target);
        }
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use ratatui::layout::Rect;

    use super::*;
    use crate::audio::AudioLibrary;
    use crate::config::Config;
    use crate::show::preload::AssetPreloader;
    use crate::show::state::{ClickTarget, Stage};

    fn click_at(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn ready_show() -> ShowState {
        let mut show = ShowState::new(
            &Config::default(),
            "text",
            AudioLibrary::muted(),
            AssetPreloader::ready(),
            SmallRng::seed_from_u64(9),
        );
        show.advance(Duration::ZERO);
        show.advance(Duration::from_millis(2000));
        show
    }

    #[test]
    fn click_on_start_button_starts() {
        let mut show = ready_show();
        show.set_hit_regions(vec![(Rect::new(10, 10, 9, 1), ClickTarget::Start)]);

        handle_mouse_event(click_at(12, 10), &mut show);
        assert_eq!(show.stage(), Stage::Running);
    }

    #[test]
    fn click_outside_regions_does_nothing() {
        let mut show = ready_show();
        show.set_hit_regions(vec![(Rect::new(10, 10, 9, 1), ClickTarget::Start)]);

        handle_mouse_event(click_at(0, 0), &mut show);
        assert_eq!(show.stage(), Stage::Ready);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut show = ready_show();
        show.set_hit_regions(vec![(Rect::new(0, 0, 80, 24), ClickTarget::Start)]);

        let mut event = click_at(5, 5);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        handle_mouse_event(event, &mut show);
        assert_eq!(show.stage(), Stage::Ready);
    }
}
