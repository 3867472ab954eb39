//! Error types for paritylife.

use thiserror::Error;

/// Everything that can go wrong between reading an initial grid and
/// writing the last rendered frame.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid rejected before any transition (non-binary, ragged, non-square)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bounded generation ran out of steps before a terminal condition
    #[error("no fixed point or return to the initial grid within {limit} steps")]
    StepLimit { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
