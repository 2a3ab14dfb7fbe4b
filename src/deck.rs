//! Deck draw-stack used to fill the board.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;

/// An ordered stack of cards, built from standard-deck indices and consumed by
/// drawing from the end.
///
/// The type has two deliberately separate surfaces: the mutable drawer used
/// while filling a board, and the read-only [`cards`](Self::cards) sequence
/// used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card indices, drawn from the end.
    indices: Vec<u8>,
}

impl Deck {
    /// Creates a deck from the given card indices, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if more than [`DECK_SIZE`] indices are given, or if
    /// any index does not denote a card.
    pub fn new(indices: Vec<u8>) -> Result<Self, DeckError> {
        if indices.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards);
        }
        for &index in &indices {
            Card::from_index(index)?;
        }
        Ok(Self { indices })
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.indices.shuffle(rng);
    }

    /// Removes and returns the card at the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns an error if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let index = self.indices.pop().ok_or(DeckError::Empty)?;
        Ok(Card::from_index(index)?)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the remaining cards in stack order, bottom of the stack first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.indices
            .iter()
            .filter_map(|&index| Card::from_index(index).ok())
            .collect()
    }
}
