use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, ExitOutput};
use crate::bookmarklet;
use crate::clipboard;
use crate::session::SPEED_STEP;

const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// Roughly one display frame; keeps a running session ticking smoothly.
const TICK_POLL_TIMEOUT: Duration = Duration::from_millis(16);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_loader();
        self.tick_session();

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        let timeout = if self.session.running() {
            TICK_POLL_TIMEOUT
        } else {
            IDLE_POLL_TIMEOUT
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.help.visible {
            self.handle_help_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter => {
                self.exit_output = Some(ExitOutput::Bookmarklet);
                self.should_quit = true;
            }
            KeyCode::F(1) | KeyCode::Char('?') => self.help.toggle(),

            // Session controls
            KeyCode::Char(' ') => self.toggle_session(),
            KeyCode::Char('d') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.config.direction = self.session.config.direction.toggled();
            }
            KeyCode::Char('o') => {
                self.session.config.loop_at_end = !self.session.config.loop_at_end;
            }
            KeyCode::Left | KeyCode::Char('[') => self.session.config.adjust_speed(-SPEED_STEP),
            KeyCode::Right | KeyCode::Char(']') => self.session.config.adjust_speed(SPEED_STEP),

            // Bookmarklet export
            KeyCode::Char('b') => self.copy_scroll_bookmarklet(),
            KeyCode::Char('B') => self.copy_stop_bookmarklet(),

            // Manual navigation; a running session continues from the new offset
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_up(1),
            KeyCode::Char('J') => self.viewport.scroll_down(10),
            KeyCode::Char('K') => self.viewport.scroll_up(10),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.viewport.half_page_down();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.viewport.half_page_up();
            }
            KeyCode::PageDown => self.viewport.half_page_down(),
            KeyCode::PageUp => self.viewport.half_page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.viewport.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.viewport.jump_to_bottom(),

            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.help.close();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll_up(1),
            KeyCode::PageDown => self.help.scroll_down(10),
            KeyCode::PageUp => self.help.scroll_up(10),
            // Swallow everything else while the popup is open
            _ => {}
        }
    }

    fn toggle_session(&mut self) {
        if self.session.running() {
            self.session.stop();
        } else {
            self.session.start();
        }
    }

    fn copy_scroll_bookmarklet(&mut self) {
        let uri = bookmarklet::scroll_uri(&self.session.config);
        self.copy_uri(&uri, "Scroll bookmarklet copied");
    }

    fn copy_stop_bookmarklet(&mut self) {
        let uri = bookmarklet::stop_uri();
        self.copy_uri(&uri, "Stop bookmarklet copied");
    }

    // Best-effort: a failed copy is reported, never fatal
    fn copy_uri(&mut self, uri: &str, success_message: &str) {
        match clipboard::copy_to_clipboard(uri, self.clipboard_backend) {
            Ok(()) => self.notification.show(success_message),
            Err(_) => self
                .notification
                .show_warning("Clipboard unavailable - nothing copied"),
        }
    }
}
