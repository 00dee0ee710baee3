//! Error types for the season engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// When an error surfaced, for callers that report setup and play failures differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    /// Raised while building the cast or validating the schedule; no round ran.
    Setup,
    /// Raised while a round was in progress.
    Runtime,
    /// The presenter asked to quit; there is no verdict.
    Aborted,
}

/// Errors that can occur while setting up or running a season.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The name pool cannot supply enough unique contestants.
    #[error("name pool exhausted: need {requested} unique names, only {available} available")]
    GenerationExhausted {
        /// Names needed.
        requested: usize,
        /// Unique names available after exclusions.
        available: usize,
    },

    /// A round removes too many (or zero) contestants for the roster it will face.
    #[error(
        "round {round}: cannot remove {remove_count} of {roster_size} contestants (must be 1..{roster_size})"
    )]
    InvalidRemoveCount {
        /// Round label.
        round: String,
        /// Configured removal count.
        remove_count: usize,
        /// Roster size the round would face.
        roster_size: usize,
    },

    /// An elimination was asked to remove a count the roster cannot supply.
    #[error("cannot remove {remove_count} of {roster_size} contestants")]
    RemoveCountOutOfRange {
        /// Requested removal count.
        remove_count: usize,
        /// Current roster size.
        roster_size: usize,
    },

    /// Any other invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The presenter reported a user-initiated quit.
    #[error("session aborted by the player")]
    PresenterAborted,

    /// The presenter could not fulfil a request.
    #[error("presenter error: {0}")]
    Presenter(String),

    /// A core invariant was violated.
    #[error("{0}")]
    Core(#[from] fr_core::CoreError),
}

impl EngineError {
    /// Whether this is a configuration error, caught before the season started.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRemoveCount { .. }
                | Self::RemoveCountOutOfRange { .. }
                | Self::InvalidConfig(_)
        )
    }

    /// Classify the error by when it can occur.
    pub fn phase(&self) -> ErrorPhase {
        match self {
            Self::GenerationExhausted { .. }
            | Self::InvalidRemoveCount { .. }
            | Self::InvalidConfig(_) => ErrorPhase::Setup,
            Self::PresenterAborted => ErrorPhase::Aborted,
            Self::RemoveCountOutOfRange { .. } | Self::Presenter(_) | Self::Core(_) => {
                ErrorPhase::Runtime
            }
        }
    }
}
