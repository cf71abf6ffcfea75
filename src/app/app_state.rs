use std::time::Instant;

use crate::config::{ClipboardBackend, Config};
use crate::document::Document;
use crate::help::HelpPopupState;
use crate::input::DocumentLoader;
use crate::notification::NotificationState;
use crate::session::{ScrollConfig, Session};
use crate::viewport::ViewportState;

/// What to print on stdout after the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutput {
    Bookmarklet,
}

pub struct App {
    pub document: Document,
    pub source_label: String,
    pub loader: Option<DocumentLoader>,
    pub viewport: ViewportState,
    pub session: Session,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub exit_output: Option<ExitOutput>,
    pub should_quit: bool,
    /// Monotonic reference for tick timestamps.
    epoch: Instant,
    dirty: bool,
}

impl App {
    pub fn new(document: Document, source_label: &str, scroll: ScrollConfig, config: &Config) -> Self {
        Self {
            document,
            source_label: source_label.to_string(),
            loader: None,
            viewport: ViewportState::new(),
            session: Session::new(scroll),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            exit_output: None,
            should_quit: false,
            epoch: Instant::now(),
            dirty: true,
        }
    }

    pub fn new_with_loader(
        loader: DocumentLoader,
        source_label: &str,
        scroll: ScrollConfig,
        config: &Config,
    ) -> Self {
        let mut app = Self::new(Document::empty(), source_label, scroll, config);
        app.loader = Some(loader);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Redraw when something changed or an animation is in flight.
    pub fn should_render(&self) -> bool {
        self.dirty || self.session.running()
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Pick up the loaded document from the background thread, if ready.
    pub fn poll_loader(&mut self) {
        let Some(loader) = &mut self.loader else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };
        self.loader = None;
        match result {
            Ok(text) => self.document = Document::from_text(&text),
            Err(e) => {
                self.notification.show_error(&e.to_string());
            }
        }
        self.dirty = true;
    }

    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Drive one animation tick against the current viewport geometry.
    pub fn tick_session(&mut self) {
        if !self.session.running() {
            return;
        }
        let tick = self
            .session
            .tick(self.now_ms(), self.viewport.offset_px, self.viewport.geometry());
        self.viewport.set_offset(tick.offset);
        if !self.session.running() {
            self.notification.show("Auto-scroll stopped");
        }
        self.dirty = true;
    }
}
