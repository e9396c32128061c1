/// Attempt state definitions for the per-target retry loop
///
/// A target starts in `Attempting(1)` and moves forward one attempt per
/// failure until it either succeeds or runs out of attempts.
use std::fmt;

/// Represents where a single target is in its retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptState {
    // ===== Active States =====
    /// Attempt number `n` (1-based) is about to run or running
    Attempting(u32),

    // ===== Terminal States =====
    /// An attempt returned HTTP 200 and a record was produced
    Succeeded,

    /// All attempts failed, or a failure could not be retried
    Exhausted,
}

impl AttemptState {
    /// The state every target starts in
    pub fn start() -> Self {
        Self::Attempting(1)
    }

    /// Returns the current attempt number, or `None` once terminal
    pub fn attempt(&self) -> Option<u32> {
        match self {
            Self::Attempting(n) => Some(*n),
            _ => None,
        }
    }

    /// Transition taken when the current attempt succeeds
    pub fn on_success(self) -> Self {
        match self {
            Self::Attempting(_) => Self::Succeeded,
            terminal => terminal,
        }
    }

    /// Transition taken when the current attempt fails with a retryable cause
    ///
    /// Moves to `Attempting(n + 1)` while `n < max_attempts`, otherwise
    /// to `Exhausted`.
    pub fn on_retryable_failure(self, max_attempts: u32) -> Self {
        match self {
            Self::Attempting(n) if n < max_attempts => Self::Attempting(n + 1),
            Self::Attempting(_) => Self::Exhausted,
            terminal => terminal,
        }
    }

    /// Transition taken when the current attempt fails and must not be retried
    pub fn on_fatal_failure(self) -> Self {
        match self {
            Self::Attempting(_) => Self::Exhausted,
            terminal => terminal,
        }
    }
}

impl fmt::Display for AttemptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attempting(n) => write!(f, "attempting({})", n),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}
