//! autoscroll library - Terminal auto-scroller with bookmarklet export
//!
//! This library exposes the core functionality of autoscroll for testing purposes.

pub mod app;
pub mod bookmarklet;
pub mod clipboard;
pub mod config;
pub mod controls;
pub mod document;
pub mod error;
pub mod help;
pub mod input;
pub mod notification;
pub mod session;
pub mod theme;
pub mod viewport;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use session::{Direction, ScrollConfig, Session};
