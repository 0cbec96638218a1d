//! Random playouts, for exercising the rules on whole games
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use crate::boop::{Player, GameState};
use crate::boop::game::Game;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// How a playout ended
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game was won by the given player
    Won(Player),
    /// The game is not over but the player to move has no legal action
    Stalled,
    /// The action limit was reached before the game ended
    Unfinished,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(player) => format!("player {} wins", player),
            Outcome::Stalled => "stalled".to_string(),
            Outcome::Unfinished => "unfinished".to_string(),
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A game played with random actions, and how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playout {
    /// The actions played and the states they led to
    pub game: Game,
    /// How the playout ended
    pub outcome: Outcome,
}

/// Plays uniformly random legal actions from `state` until the game is won, the player to move
/// has no legal action, or `max_actions` actions have been played.
pub fn random_playout<R: Rng + ?Sized>(state: GameState, rng: &mut R, max_actions: usize)
    -> Playout {
    let mut game = Game::starting_at(state);

    let outcome = loop {
        if let Some(winner) = game.winner() {
            break Outcome::Won(winner);
        }
        if game.len() >= max_actions {
            break Outcome::Unfinished;
        }

        let actions = game.state().actions();
        let action = match actions.choose(rng) {
            Some(&action) => action,
            None => break Outcome::Stalled,
        };

        debug!("playing {}", action);
        game.play(action).expect("INFALLIBLE");
    };

    info!("playout {} after {} actions: {}", outcome, game.len(), game.state());

    Playout { game, outcome }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn finished_state_is_not_played() {
        let state: GameState = "6/6/6/6/6/bbb3 1 8-0 5-0".parse().unwrap();
        let playout = random_playout(state, &mut StdRng::seed_from_u64(1), 100);
        assert_eq!(playout.outcome, Outcome::Won(Player::Player2));
        assert!(playout.game.is_empty());
    }

    #[test]
    fn action_limit_is_respected() {
        let playout = random_playout(GameState::default(), &mut StdRng::seed_from_u64(7), 5);
        assert_eq!(playout.outcome, Outcome::Unfinished);
        assert_eq!(playout.game.len(), 5);
    }

    #[test]
    fn same_seed_gives_same_game() {
        let first = random_playout(GameState::default(), &mut StdRng::seed_from_u64(42), 200);
        let second = random_playout(GameState::default(), &mut StdRng::seed_from_u64(42), 200);
        assert_eq!(first, second);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Won(Player::Player1).to_string(), "player 1 wins");
        assert_eq!(Outcome::Stalled.to_string(), "stalled");
    }
}
