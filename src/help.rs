//! Help popup
//!
//! Static keyboard shortcut reference, scrollable when the terminal is
//! short.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;
use crate::widgets::{popup, render_vertical_scrollbar};

pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Space", "Start / stop auto-scrolling"),
    ("d", "Toggle direction (down / up)"),
    ("o", "Toggle loop at end"),
    ("←/→ or [/]", "Speed -/+ 50 px/s"),
    ("b", "Copy scroll bookmarklet to clipboard"),
    ("B", "Copy stop bookmarklet to clipboard"),
    ("Enter", "Print scroll bookmarklet and exit"),
    ("j/k or ↓/↑", "Scroll one line"),
    ("J/K", "Scroll 10 lines"),
    ("Ctrl+D/U", "Half page down / up"),
    ("PageDown/Up", "Half page down / up"),
    ("g/Home", "Jump to top"),
    ("G/End", "Jump to bottom"),
    ("F1 or ?", "Toggle this help"),
    ("q or Ctrl+C", "Quit"),
];

pub const HELP_FOOTER: &str = "j/k: scroll | q: close";

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: u16,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        // Upper bound applied at render time, when the height is known
        self.scroll = self
            .scroll
            .saturating_add(lines)
            .min(HELP_ENTRIES.len() as u16);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

const POPUP_WIDTH: u16 = 52;
const KEY_COLUMN: usize = 14;

pub fn render_popup(state: &mut HelpPopupState, frame: &mut Frame) {
    if !state.visible {
        return;
    }

    let height = (HELP_ENTRIES.len() as u16 + 2).min(frame.area().height);
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let viewport = usize::from(area.height.saturating_sub(2));
    let max_scroll = HELP_ENTRIES.len().saturating_sub(viewport) as u16;
    state.scroll = state.scroll.min(max_scroll);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!(" {:<width$}", key, width = KEY_COLUMN), theme::help::KEY),
                Span::styled(*description, Style::default().fg(theme::help::DESCRIPTION)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .title_bottom(Line::from(HELP_FOOTER).style(Style::default().fg(theme::help::FOOTER)))
        .border_style(Style::default().fg(theme::help::BORDER));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((state.scroll, 0)),
        area,
    );

    render_vertical_scrollbar(
        frame,
        area,
        HELP_ENTRIES.len(),
        viewport,
        usize::from(state.scroll),
        theme::help::SCROLLBAR,
    );
}
