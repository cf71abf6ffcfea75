//! Clipboard support for the generated bookmarklets
//!
//! Backends:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)
//!
//! Copying is best-effort: callers surface failures as a notification and
//! carry on.

use std::io::{self, Write as _};

use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::config::ClipboardBackend;

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug)]
pub enum ClipboardError {
    SystemUnavailable,
    WriteError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system_copy(text),
        ClipboardBackend::Osc52 => osc52_copy(text),
        ClipboardBackend::Auto => system_copy(text).or_else(|_| osc52_copy(text)),
    }
}

fn system_copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

/// Copy via OSC 52: terminal emulators that support the sequence perform the
/// clipboard write themselves, which also works over SSH and tmux.
fn osc52_copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

/// Encode text as an OSC 52 sequence: `\x1b]52;c;{base64}\x07`.
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}
