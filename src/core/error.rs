//! Engine error kinds.
//!
//! Every rejected operation produces exactly one of two kinds and leaves the
//! board untouched:
//!
//! - `InvalidArgument`: structurally impossible input (out-of-range index or
//!   coordinate, malformed card or config)
//! - `InvalidState`: valid input that is illegal in the current phase or for
//!   the current board occupancy

use thiserror::Error;

/// Error returned by board, cell and card operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Caller supplied a structurally impossible input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input is illegal given the current game phase or occupancy.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl BoardError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Result alias used across the engine.
pub type BoardResult<T> = Result<T, BoardError>;
