//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card index is outside the standard deck.
    #[error("card index is outside the standard deck")]
    InvalidIndex,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More indices than fit in a standard deck.
    #[error("a deck can only contain up to 52 cards")]
    TooManyCards,
    /// No cards left to draw.
    #[error("no more cards available to draw")]
    Empty,
    /// An index does not denote a card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board size is zero.
    #[error("board size must be at least 2")]
    ZeroSize,
    /// Board size is odd, so cells cannot be filled with pairs.
    #[error("board size must be an even number")]
    OddSize,
    /// The board needs more cells than a deck has cards.
    #[error("not enough cards in a deck to fill the board")]
    TooLarge,
}

/// Errors that can occur when submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The game has already finished.
    #[error("the game has already finished")]
    GameOver,
    /// A coordinate lies outside the board.
    #[error("coordinates lie outside the board")]
    OutOfBounds,
    /// Both guesses name the same cell.
    #[error("guesses must name two different cells")]
    SameCell,
    /// A guessed cell is already uncovered.
    #[error("cell is already uncovered")]
    AlreadyRevealed,
}

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// No player names were given.
    #[error("at least one player is required")]
    NoPlayers,
    /// A player name is empty.
    #[error("player names must not be empty")]
    EmptyName,
    /// The board could not be built.
    #[error(transparent)]
    Board(#[from] BoardError),
}
