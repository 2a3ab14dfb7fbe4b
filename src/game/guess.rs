use crate::error::GuessError;
use crate::result::GuessOutcome;

use super::{Game, GameState};

impl Game {
    /// Submits the current player's two-cell guess.
    ///
    /// On a match the player scores a point, takes both cards into their
    /// hand, and keeps the turn. On a mismatch the turn passes to the next
    /// player in rotation. Once the last pair is matched the session moves to
    /// [`GameState::Finished`] and rejects further guesses.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has finished, a coordinate lies outside
    /// the board, both guesses name the same cell, or a guessed cell is
    /// already uncovered.
    pub fn submit_guess(
        &mut self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<GuessOutcome, GuessError> {
        if self.state == GameState::Finished {
            return Err(GuessError::GameOver);
        }

        let outcome = self.board.check_guess(row1, col1, row2, col2)?;

        match outcome {
            GuessOutcome::Match(a, b) => {
                let player = &mut self.players[self.current];
                player.increment_score();
                player.add_card_to_hand(a);
                player.add_card_to_hand(b);
            }
            GuessOutcome::Mismatch(..) => {
                self.current = (self.current + 1) % self.players.len();
            }
        }

        if self.board.is_complete() {
            self.state = GameState::Finished;
        }

        Ok(outcome)
    }
}
