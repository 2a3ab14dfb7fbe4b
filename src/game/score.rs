use alloc::string::String;
use alloc::vec::Vec;

use crate::player::Player;
use crate::result::{Standing, Winner};

use super::{Game, GameState};

impl Game {
    /// Returns the players as name/score records, highest score first.
    ///
    /// The sort is stable, so players with equal scores keep their turn
    /// order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                name: String::from(player.name()),
                score: player.score(),
            })
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    /// Returns the winner once the game has finished.
    ///
    /// Returns `None` while pairs are still hidden. A single player holding
    /// the strict maximum score wins outright; otherwise every player sharing
    /// the maximum is reported as part of the tie.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        if self.state != GameState::Finished {
            return None;
        }

        let best = self.players.iter().map(Player::score).max()?;
        let mut tied: Vec<String> = self
            .players
            .iter()
            .filter(|player| player.score() == best)
            .map(|player| String::from(player.name()))
            .collect();

        if tied.len() == 1 {
            tied.pop().map(Winner::Single)
        } else {
            Some(Winner::Tie(tied))
        }
    }
}
