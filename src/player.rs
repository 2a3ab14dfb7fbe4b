//! Player state: name, score, and collected pairs.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A participant in a game of Memory.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player's name.
    name: String,
    /// Pairs matched so far.
    score: u32,
    /// Cards collected from matched pairs.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            score: 0,
            hand: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Awards a point for a matched pair.
    pub const fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Adds a matched card to the player's hand.
    pub fn add_card_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Returns the cards in the player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}
