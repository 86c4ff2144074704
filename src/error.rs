//! Errors raised by the grid, the seed algorithms and the session.

use thiserror::Error;

/// All kinds of errors in the simulation core.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid size {width}x{height} is outside the supported range 1x1 to {max_width}x{max_height}")]
    Size {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    #[error("cell index {index} is out of range for a grid of {capacity} cells")]
    Index { index: usize, capacity: usize },

    #[error("undefined algorithm for the initial state: {0:?}")]
    UnknownAlgorithm(String),

    #[error("invalid argument for the {algorithm} algorithm: {reason}")]
    InvalidArgument {
        algorithm: &'static str,
        reason: String,
    },

    #[error("the game is already running")]
    AlreadyRunning,

    #[error("tick period must be positive")]
    InvalidPeriod,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
