use thiserror::Error;

/// Error type shared across the app.
///
/// IO errors are carried as strings so the loader can clone them across
/// its channel boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutoScrollError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Document loader thread disconnected")]
    LoaderDisconnected,
}

impl From<std::io::Error> for AutoScrollError {
    fn from(err: std::io::Error) -> Self {
        AutoScrollError::Io(err.to_string())
    }
}
