//! Game configuration options.

/// Configuration options for a game of Memory.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use memrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_board_size(6)
///     .with_shuffle_players(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Side length of the square board. Must be even, with at most 52 cells.
    pub board_size: usize,
    /// Whether the turn order is shuffled once at the start of the session.
    pub shuffle_players: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            board_size: 4,
            shuffle_players: true,
        }
    }
}

impl GameOptions {
    /// Sets the side length of the board.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_board_size(2);
    /// assert_eq!(options.board_size, 2);
    /// ```
    #[must_use]
    pub const fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets whether the turn order is shuffled at the start of the session.
    ///
    /// Disabling this keeps players in the order their names were given,
    /// which is useful for tests and scripted games.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_players(false);
    /// assert!(!options.shuffle_players);
    /// ```
    #[must_use]
    pub const fn with_shuffle_players(mut self, shuffle: bool) -> Self {
        self.shuffle_players = shuffle;
        self
    }
}
