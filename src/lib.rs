//! A Memory (Concentration) game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a full session: building the
//! rank-paired board, validating and resolving guesses, tracking scores and
//! hands, rotating turns, and detecting the winner. The engine never reads
//! input or prints; a front end renders the [`Board`] and feeds coordinates in.
//!
//! # Example
//!
//! ```no_run
//! use memrs::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_board_size(4);
//! let game = Game::new(&["ada", "grace"], options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use board::{Board, Cell};
pub use card::{Card, DECK_SIZE, RANK_COUNT, Suit};
pub use deck::Deck;
pub use error::{BoardError, CardError, DeckError, GuessError, NewGameError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::{GuessOutcome, Standing, Winner};
