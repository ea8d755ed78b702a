use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when assigning a move into a Pokemon's moveset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveLearnerError {
    /// Slot index is negative, past the last slot, or would leave a gap
    #[error("Invalid move parameters.")]
    InvalidMoveParameters { index: i32, known_moves: usize },
    /// The move is already known in a different slot
    #[error("This Pokemon already knows this move.")]
    DuplicateMove { title: String, slot: usize },
}

/// Errors related to loading the learner configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid RON
    #[error("Malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using MoveLearnerError
pub type LearnResult<T> = Result<T, MoveLearnerError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
