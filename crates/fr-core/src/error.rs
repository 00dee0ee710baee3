/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when mutating the roster or game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A character with the same name is already seated.
    #[error("contestant already exists: \"{0}\"")]
    DuplicateName(String),

    /// The named contestant is not on the roster or in the ledger.
    #[error("unknown contestant: \"{0}\"")]
    UnknownContestant(String),

    /// The target character cannot be seated as a contestant.
    #[error("target cannot compete: \"{0}\"")]
    TargetNotEligible(String),

    /// The named contestant has already been eliminated.
    #[error("contestant already eliminated: \"{0}\"")]
    AlreadyEliminated(String),

    /// A round result does not account for the roster it was computed from.
    #[error("round result mismatch: {0}")]
    RoundMismatch(String),
}
