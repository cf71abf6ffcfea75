pub mod loader;

pub use loader::{DocumentLoader, LoadingState};
