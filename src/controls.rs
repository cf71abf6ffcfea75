//! Controls panel
//!
//! Shows the current session configuration and the keys that mutate it.
//! The values render straight from the validated `ScrollConfig`, so what is
//! displayed is exactly what the bookmarklet generator embeds.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;

/// Rows needed by the panel, including its borders.
pub const PANEL_HEIGHT: u16 = 6;

pub fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let config = &app.session.config;

    let status = if app.session.running() {
        Span::styled(
            "running",
            Style::default().fg(theme::document::STATUS_RUNNING),
        )
    } else {
        Span::styled(
            "stopped",
            Style::default().fg(theme::document::STATUS_STOPPED),
        )
    };

    let label = Style::default().fg(theme::controls::LABEL);
    let value = Style::default().fg(theme::controls::VALUE);
    let active = Style::default().fg(theme::controls::VALUE_ACTIVE);
    let hint = Style::default().fg(theme::controls::KEY_HINT);

    let lines = vec![
        Line::from(vec![
            Span::styled("Speed      ", label),
            Span::styled(format!("{:>4} px/s", config.speed.round() as i64), active),
            Span::styled("   ←/→ adjust", hint),
        ]),
        Line::from(vec![
            Span::styled("Direction  ", label),
            Span::styled(config.direction.label(), value),
            Span::styled("   d toggle", hint),
        ]),
        Line::from(vec![
            Span::styled("Loop       ", label),
            Span::styled(if config.loop_at_end { "on" } else { "off" }, value),
            Span::styled("   o toggle", hint),
        ]),
        Line::from(vec![
            Span::styled("Status     ", label),
            status,
            Span::styled("   Space start/stop", hint),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Scroll controls ",
            Style::default().fg(theme::controls::BORDER),
        ))
        .border_style(Style::default().fg(theme::controls::BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
