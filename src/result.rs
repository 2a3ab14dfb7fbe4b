//! Structured results returned to the front end.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Outcome of a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The two cards share a rank; both cells stay revealed.
    Match(Card, Card),
    /// The cards differ in rank; both cells remain hidden. The cards are
    /// included so the front end can show them briefly before covering them.
    Mismatch(Card, Card),
}

impl GuessOutcome {
    /// Returns whether the guess was a match.
    #[must_use]
    pub const fn matched(&self) -> bool {
        matches!(self, Self::Match(_, _))
    }
}

/// A player's entry in the final or running standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player's name.
    pub name: String,
    /// The player's score.
    pub score: u32,
}

/// The result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// Exactly one player holds the maximum score.
    Single(String),
    /// The tie-set: every player sharing the maximum score.
    Tie(Vec<String>),
}
