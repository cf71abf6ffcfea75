use ansi_to_tui::IntoText as _;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::controls;
use crate::help;
use crate::notification::render_notification;
use crate::theme;
use crate::widgets::render_vertical_scrollbar;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(controls::PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_document(frame, layout[0]);
        controls::render_panel(self, frame, layout[1]);
        render_footer(frame, layout[2]);

        help::render_popup(&mut self.help, frame);
        render_notification(frame, &self.notification);
    }

    fn render_document(&mut self, frame: &mut Frame, area: Rect) {
        let viewport_rows = area.height.saturating_sub(2);
        self.viewport
            .update_bounds(self.document.line_count(), viewport_rows);

        let status = if self.session.running() {
            Span::styled(
                " ▶ running ",
                Style::default().fg(theme::document::STATUS_RUNNING),
            )
        } else {
            Span::styled(
                " ■ stopped ",
                Style::default().fg(theme::document::STATUS_STOPPED),
            )
        };
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", self.source_label),
                Style::default().fg(theme::document::TITLE),
            ),
            status,
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme::document::BORDER));

        let body = if self.loader.as_ref().is_some_and(|l| l.is_loading()) {
            Text::raw("Loading document...")
        } else {
            let raw = self.document.text();
            raw.as_bytes()
                .to_vec()
                .into_text()
                .unwrap_or_else(|_| Text::raw(raw))
        };

        frame.render_widget(
            Paragraph::new(body)
                .block(block)
                .scroll((self.viewport.top_row(), 0)),
            area,
        );

        render_vertical_scrollbar(
            frame,
            area,
            self.document.line_count(),
            usize::from(viewport_rows),
            usize::from(self.viewport.top_row()),
            theme::document::SCROLLBAR,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hint = |text: &'static str| Span::styled(text, Style::default().fg(theme::footer::KEY));
    let sep = |text: &'static str| Span::styled(text, Style::default().fg(theme::footer::TEXT));

    let line = Line::from(vec![
        hint(" Space"),
        sep(" start/stop  "),
        hint("b"),
        sep(" copy bookmarklet  "),
        hint("B"),
        sep(" copy stop  "),
        hint("?"),
        sep(" help  "),
        hint("q"),
        sep(" quit"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
