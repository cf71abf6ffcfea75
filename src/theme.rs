//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here; render files reference
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Document pane styles
pub mod document {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::CYAN;
    pub const STATUS_RUNNING: Color = palette::SUCCESS;
    pub const STATUS_STOPPED: Color = palette::TEXT_MUTED;
    pub const SCROLLBAR: Color = palette::TEXT_DIM;
}

/// Controls panel styles
pub mod controls {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const VALUE: Color = palette::TEXT;
    pub const VALUE_ACTIVE: Color = palette::PINK;
    pub const KEY_HINT: Color = palette::TEXT_DIM;
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const KEY: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_MUTED;
    pub const SCROLLBAR: Color = palette::PURPLE;
}

/// Footer line styles
pub mod footer {
    use super::*;

    pub const TEXT: Color = palette::TEXT_MUTED;
    pub const KEY: Color = palette::CYAN;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub const INFO: Style = Style::new().fg(palette::TEXT).bg(palette::BG_SURFACE);
    pub const WARNING: Style = Style::new().fg(Color::Black).bg(palette::WARNING);
    pub const ERROR: Style = Style::new().fg(palette::TEXT).bg(palette::ERROR);
}
