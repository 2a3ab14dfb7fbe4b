//! Game session and turn management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::error::NewGameError;
use crate::options::GameOptions;
use crate::player::Player;

mod guess;
mod score;
pub mod state;

pub use state::GameState;

/// A Memory game session: the board, the players in turn order, and the
/// repeat-on-match turn rule.
///
/// The session is driven by a single caller: build it with [`Game::new`],
/// feed it coordinates through [`Game::submit_guess`], and read the outcome
/// through [`Game::standings`] and [`Game::winner`]. All randomness comes
/// from the seed, so a session replays identically under the same inputs.
#[derive(Debug)]
pub struct Game {
    /// The board being played.
    board: Board,
    /// Players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current: usize,
    /// Current game state.
    state: GameState,
    /// Game options.
    pub options: GameOptions,
}

impl Game {
    /// Creates a new session with the given player names, options, and seed.
    ///
    /// The board is built and the turn order fixed (shuffled once when
    /// [`GameOptions::shuffle_players`] is set) up front; the session starts
    /// in [`GameState::InProgress`] with the first player to move.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use memrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(&["ada", "grace"], options, 42);
    /// let _ = game;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if no names are given, any name is blank, or the
    /// configured board size is zero, odd, or needs more than a deck of
    /// cards.
    pub fn new(names: &[&str], options: GameOptions, seed: u64) -> Result<Self, NewGameError> {
        if names.is_empty() {
            return Err(NewGameError::NoPlayers);
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(NewGameError::EmptyName);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::build(options.board_size, &mut rng)?;

        let mut players: Vec<Player> = names
            .iter()
            .map(|name| Player::new(String::from(*name)))
            .collect();
        if options.shuffle_players {
            players.shuffle(&mut rng);
        }

        Ok(Self {
            board,
            players,
            current: 0,
            state: GameState::InProgress,
            options,
        })
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player whose turn it is.
    ///
    /// The turn pointer only moves on a mismatched guess, so after a match
    /// this is still the player who made it.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether every pair on the board has been found.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.board.is_complete()
    }
}
