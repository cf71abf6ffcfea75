//! Document loader
//!
//! Reads the input file (or stdin) on a background thread so startup never
//! blocks the UI, with results handed back over a channel.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use crate::error::AutoScrollError;

/// Current state of document loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete(String),
    Error(AutoScrollError),
}

/// Manages asynchronous document loading in a background thread
pub struct DocumentLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<String, AutoScrollError>>>,
}

impl DocumentLoader {
    /// Spawn a background thread to read a file
    pub fn spawn_load(path: PathBuf) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_file_sync(&path);
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Spawn a background thread to read stdin
    pub fn spawn_load_stdin() -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_stdin_sync();
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for completion without blocking. Returns None while loading,
    /// Some with the result once the thread reports back.
    pub fn poll(&mut self) -> Option<Result<String, AutoScrollError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(text) => LoadingState::Complete(text.clone()),
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.rx = None;
                let err = AutoScrollError::LoaderDisconnected;
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

fn load_file_sync(path: &Path) -> Result<String, AutoScrollError> {
    Ok(std::fs::read_to_string(path)?)
}

fn load_stdin_sync() -> Result<String, AutoScrollError> {
    use std::io::Read as _;

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn temp_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    fn poll_until_done(loader: &mut DocumentLoader) -> Result<String, AutoScrollError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader did not finish in time");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_load_file_completes() {
        let (_dir, path) = temp_file("line one\nline two\n");
        let mut loader = DocumentLoader::spawn_load(path);
        assert!(loader.is_loading());

        let result = poll_until_done(&mut loader);
        assert_eq!(result.unwrap(), "line one\nline two\n");
        assert!(!loader.is_loading());
        assert!(matches!(loader.state, LoadingState::Complete(_)));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut loader = DocumentLoader::spawn_load(PathBuf::from("/nonexistent/doc.txt"));
        let result = poll_until_done(&mut loader);
        assert!(matches!(result, Err(AutoScrollError::Io(_))));
        assert!(matches!(loader.state, LoadingState::Error(_)));
    }

    #[test]
    fn test_poll_after_completion_returns_none() {
        let (_dir, path) = temp_file("x");
        let mut loader = DocumentLoader::spawn_load(path);
        let _ = poll_until_done(&mut loader);
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let (_dir, path) = temp_file("");
        let mut loader = DocumentLoader::spawn_load(path);
        let result = poll_until_done(&mut loader);
        assert_eq!(result.unwrap(), "");
    }
}
