//! Crate-wide error type
//!
//! The simulation itself only rejects a negative radius. The remaining
//! variants come from the world driver and from settings I/O.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A constructor argument violated an invariant (e.g. negative radius).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A world index did not refer to a live ball.
    #[error("no ball at index {index} (world holds {len})")]
    NoSuchBall { index: usize, len: usize },

    /// Settings JSON could not be parsed or written.
    #[error("settings error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
