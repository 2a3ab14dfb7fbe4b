//! Board engine: pair placement, guess resolution, and completion tracking.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANK_COUNT};
use crate::deck::Deck;
use crate::error::{BoardError, GuessError};
use crate::result::GuessOutcome;

/// The visible state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The card at this cell has not been uncovered.
    Hidden,
    /// The card at this cell has been matched and stays face-up.
    Revealed(Card),
}

/// An n×n grid of face-down rank pairs.
///
/// The board keeps two parallel grids: the fixed `solution` laid out at build
/// time, and the mutable `visible` grid the players see. Cells move from
/// [`Cell::Hidden`] to [`Cell::Revealed`] only through a successful match; a
/// mismatched guess leaves both cells hidden, and showing them briefly is the
/// front end's job (see [`GuessOutcome::Mismatch`]).
#[derive(Debug, Clone)]
pub struct Board {
    /// Side length of the square grid.
    size: usize,
    /// Card at every cell, row-major, fixed after build.
    solution: Vec<Card>,
    /// What the players see, row-major.
    visible: Vec<Cell>,
    /// Number of permanently revealed cells.
    revealed: usize,
}

impl Board {
    /// Builds a board of `size`×`size` cells filled with rank pairs.
    ///
    /// All 52 deck indices are shuffled; each of the first `size²/2` indices
    /// in the pool then claims the first later index of the same rank as its
    /// partner. The selected pairs are shuffled again and dealt row-major, so
    /// partners end up at unrelated cells. Every cell starts hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or odd, or if `size²` exceeds
    /// [`DECK_SIZE`].
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck holds four cards of every rank, so every leader finds a partner"
    )]
    pub fn build(size: usize, rng: &mut ChaCha8Rng) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if size % 2 != 0 {
            return Err(BoardError::OddSize);
        }
        let cells = size * size;
        if cells > DECK_SIZE {
            return Err(BoardError::TooLarge);
        }

        let mut pool: Vec<u8> = (0..DECK_SIZE as u8).collect();
        pool.shuffle(rng);

        let mut selection = Vec::with_capacity(cells);
        for lead in 0..cells / 2 {
            let rank = pool[lead] % RANK_COUNT;
            let partner = (lead + 1..pool.len())
                .find(|&at| pool[at] % RANK_COUNT == rank)
                .expect("a later card of the same rank always remains in the pool");
            selection.push(pool.remove(partner));
            selection.push(pool[lead]);
        }

        let mut deck =
            Deck::new(selection).expect("the selection is at most a full deck of valid indices");
        deck.shuffle(rng);

        let mut solution = Vec::with_capacity(cells);
        for _ in 0..cells {
            solution.push(deck.draw().expect("the deck holds one card per cell"));
        }

        Ok(Self {
            size,
            solution,
            visible: alloc::vec![Cell::Hidden; cells],
            revealed: 0,
        })
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the visible state of the cell at `(row, col)`.
    ///
    /// Returns `None` if the coordinates lie outside the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.visible[self.at(row, col)])
        } else {
            None
        }
    }

    /// Returns the full solution grid in row-major order.
    ///
    /// This is the face-up view of every cell. It exists for renderers,
    /// debugging, and tests; showing it to players defeats the game.
    #[must_use]
    pub fn solution(&self) -> &[Card] {
        &self.solution
    }

    /// Resolves a two-cell guess.
    ///
    /// On a rank match both cells are revealed permanently. On a mismatch the
    /// board is left untouched and both cards are returned so the caller can
    /// show them briefly before covering them again.
    ///
    /// # Errors
    ///
    /// Returns an error if the two guesses name the same cell, a coordinate
    /// lies outside the board, or either cell is already uncovered.
    pub fn check_guess(
        &mut self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<GuessOutcome, GuessError> {
        if row1 == row2 && col1 == col2 {
            return Err(GuessError::SameCell);
        }
        let first = self.cell(row1, col1).ok_or(GuessError::OutOfBounds)?;
        let second = self.cell(row2, col2).ok_or(GuessError::OutOfBounds)?;
        if first != Cell::Hidden || second != Cell::Hidden {
            return Err(GuessError::AlreadyRevealed);
        }

        let a = self.solution[self.at(row1, col1)];
        let b = self.solution[self.at(row2, col2)];

        if a.matches(b) {
            self.reveal(row1, col1);
            self.reveal(row2, col2);
            Ok(GuessOutcome::Match(a, b))
        } else {
            Ok(GuessOutcome::Mismatch(a, b))
        }
    }

    /// Returns whether every cell has been revealed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.revealed == self.size * self.size
    }

    /// Returns the number of permanently revealed cells.
    #[must_use]
    pub const fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Uncovers the cell at `(row, col)` for good.
    fn reveal(&mut self, row: usize, col: usize) {
        let at = self.at(row, col);
        if self.visible[at] == Cell::Hidden {
            self.visible[at] = Cell::Revealed(self.solution[at]);
            self.revealed += 1;
        }
    }

    const fn at(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}
