//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are still uncovering pairs.
    InProgress,
    /// Every pair has been found; no further guesses are accepted.
    Finished,
}
