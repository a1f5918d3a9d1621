//! Error types for the aquarium.

use thiserror::Error;

/// Result type for fallible aquarium operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while presenting the aquarium.
///
/// The simulation itself never fails; only the terminal side can.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to or configuring the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The display was asked to draw before `enter` was called.
    #[error("display is not active")]
    NotActive,
}
