//! Loading splash and start screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::HitRegions;
use crate::show::state::{ClickTarget, ShowState, Stage};
use crate::tui::theme::Theme;
use crate::tui::ui::centered_box;

pub const START_LABEL: &str = "[ START ]";

const BANNER: &[&str] = &[
    " _   _    _    ____ _  _______   ______  _____ ____  ",
    "| | | |  / \\  / ___| |/ /_ _\\ \\ / /  _ \\| ____|  _ \\ ",
    "| |_| | / _ \\| |   | ' / | | \\ V /| |_) |  _| | |_) |",
    "|  _  |/ ___ \\ |___| . \\ | |  | | |  __/| |___|  _ < ",
    "|_| |_/_/   \\_\\____|_|\\_\\___| |_| |_|   |_____|_| \\_\\",
];

/// Loading bar like `[#####.....]`.
pub fn progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (done.min(total) * width) / total
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn render_splash(frame: &mut Frame, area: Rect, show: &ShowState, theme: &Theme, regions: &mut HitRegions) {
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.accent_bold_style())))
        .collect();
    lines.push(Line::from(""));

    match show.stage() {
        Stage::Loading { assets_ready } => {
            let preloader = show.preloader();
            let (done, total) = if assets_ready {
                (preloader.total(), preloader.total())
            } else {
                (preloader.ready_count(), preloader.total())
            };
            lines.push(Line::from(Span::styled(
                "loading program...",
                theme.text_style(),
            )));
            lines.push(Line::from(Span::styled(
                progress_bar(done, total, 30),
                theme.text_style(),
            )));
        }
        Stage::Ready | Stage::Running => {
            lines.push(Line::from(Span::styled(
                "program loaded. press Enter",
                theme.text_style(),
            )));
            lines.push(Line::from(""));
        }
    }

    let height = lines.len() as u16 + 2;
    let box_area = centered_box(BANNER[0].len() as u16, height, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        box_area,
    );

    if show.stage() == Stage::Ready {
        let width = START_LABEL.len() as u16;
        let button = Rect::new(
            box_area.x + box_area.width.saturating_sub(width) / 2,
            box_area.bottom().saturating_sub(1),
            width.min(box_area.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(START_LABEL).style(
                theme
                    .accent_bold_style()
                    .add_modifier(Modifier::REVERSED),
            ),
            button,
        );
        regions.push((button, ClickTarget::Start));
    }
}
