//! Shared test utilities for autoscroll

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::document::Document;
    use crate::session::ScrollConfig;

    /// Helper to create an App showing the demo document with default config
    pub fn test_app() -> App {
        App::new(
            Document::demo(),
            "demo",
            ScrollConfig::default(),
            &Config::default(),
        )
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
