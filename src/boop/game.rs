//! Module to record a game of boop as a sequence of actions
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::iter;
use super::{Player, Rules, Action, GameState};
use super::error::{Result, LoadRulesError};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A game: the actions taken so far, the state each was taken from, and the current state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    history: Vec<(Action, GameState)>,
    state: GameState,
}

impl Game {
    /// Creates a new game from the starting state for `rules`
    ///
    /// # Errors
    ///
    /// Returns an error if `rules` fail `Rules::validate`.
    pub fn new(rules: Rules) -> std::result::Result<Self, LoadRulesError> {
        Ok(Game::starting_at(GameState::new(rules)?))
    }

    /// Creates a new game using `state` as the starting state
    pub fn starting_at(state: GameState) -> Self {
        Game {
            history: Vec::new(),
            state,
        }
    }

    /// Carries out `action` and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if `action` is not legal in the current
    /// state.
    pub fn play(&mut self, action: Action) -> Result<&GameState> {
        let before = self.state.clone();
        self.state.apply(&action)?;
        self.history.push((action, before));

        Ok(&self.state)
    }

    /// Parses `action` and carries it out
    pub fn play_str(&mut self, action: &str) -> Result<&GameState> {
        let action = action.parse()?;

        self.play(action)
    }

    /// Plays each of the whitespace separated actions in `actions`, stopping at the first error.
    pub fn play_all(&mut self, actions: &str) -> Result<&GameState> {
        for action in actions.split_whitespace() {
            self.play_str(action)?;
        }

        Ok(&self.state)
    }

    /// Undoes the last action and returns it, or `None` if no action has been played.
    pub fn undo(&mut self) -> Option<Action> {
        let (action, before) = self.history.pop()?;
        self.state = before;

        Some(action)
    }

    /// Returns the number of actions played.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if no action has been played.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the state the game started from
    pub fn initial_state(&self) -> &GameState {
        self.history.first().map_or(&self.state, |(_, state)| state)
    }

    /// Returns an iterator over the actions played, in order.
    pub fn actions(&self) -> impl DoubleEndedIterator<Item = &Action> + ExactSizeIterator {
        self.history.iter().map(|(action, _)| action)
    }

    /// Returns an iterator over the states of the game, from the initial state up to and
    /// including the current state.
    pub fn states(&self) -> impl DoubleEndedIterator<Item = &GameState> {
        self.history.iter().map(|(_, state)| state).chain(iter::once(&self.state))
    }

    /// Returns the winner, if the game is over
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns the number of earlier states identical to the current one.
    pub fn repetitions(&self) -> usize {
        self.history.iter().filter(|(_, state)| *state == self.state).count()
    }
}

impl fmt::Display for Game {
    /// The game is formatted as follows:
    ///
    /// "{}" -- The actions separated by spaces (eg sc3 sd4 a1-b1-c1)
    ///
    /// "{:#}" -- One action per line, each followed by the resulting state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if f.alternate() {
            self.actions()
                .zip(self.states().skip(1))
                .map(|(action, state)| format!("{:10}{}\n", action, state))
                .collect::<String>()
        } else {
            self.actions().map(|action| action.to_string()).collect::<Vec<_>>().join(" ")
        };

        s.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::boop::Phase;
    use crate::boop::error::{Error, PieceErrorKind};

    #[test]
    fn new_game_is_empty() {
        let game = Game::default();
        assert!(game.is_empty());
        assert_eq!(game.len(), 0);
        assert_eq!(game.state(), &GameState::default());
        assert_eq!(game.initial_state(), game.state());
        assert_eq!(game.states().count(), 1);
        assert_eq!(game.to_string(), "");
    }

    #[test]
    fn new_game_checks_rules() {
        let game = Game::new(Rules { pieces_per_player: 5, ..Rules::default() }).unwrap();
        assert_eq!(game.state().to_string(), "6/6/6/6/6/6 1 5-0 5-0");
        assert!(Game::new(Rules { pieces_per_player: 19, ..Rules::default() }).is_err());
    }

    #[test]
    fn play_records_actions_and_states() {
        let mut game = Game::default();
        game.play_all("sc3 se5 sa1").unwrap();

        assert_eq!(game.len(), 3);
        assert_eq!(game.to_string(), "sc3 se5 sa1");
        assert_eq!(game.initial_state(), &GameState::default());
        assert_eq!(game.state().to_string(), "6/4s1/6/2S3/6/S5 2 6-0 7-0");

        let states: Vec<_> = game.states().map(|s| s.to_string()).collect();
        assert_eq!(states, vec![
            "6/6/6/6/6/6 1 8-0 8-0",
            "6/6/6/2S3/6/6 2 7-0 8-0",
            "6/4s1/6/2S3/6/6 1 7-0 7-0",
            "6/4s1/6/2S3/6/S5 2 6-0 7-0",
        ]);
    }

    #[test]
    fn illegal_actions_leave_the_game_unchanged() {
        let mut game = Game::default();
        game.play_str("sc3").unwrap();
        let before = game.clone();

        match game.play_str("sc3") {
            Err(Error::PlacePiece(err)) => assert_eq!(err.kind(), PieceErrorKind::CellOccupied),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(game.play_str("sz9"), Err(Error::ParseAction(_))));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut game = Game::default();
        game.play_all("sc3 sd4").unwrap();

        assert_eq!(game.undo(), Some("sd4".parse().unwrap()));
        assert_eq!(game.state().to_string(), "6/6/6/2S3/6/6 2 7-0 8-0");
        assert_eq!(game.undo(), Some("sc3".parse().unwrap()));
        assert_eq!(game.undo(), None);
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn repeated_states_are_counted() {
        let mut game = Game::default();
        game.play_all("sb1 sa2").unwrap();
        assert_eq!(game.repetitions(), 0);

        game.play_str("sb1").unwrap();
        assert_eq!(game.repetitions(), 1);
        game.play_str("sa2").unwrap();
        assert_eq!(game.repetitions(), 1);
        game.play_str("sb1").unwrap();
        assert_eq!(game.repetitions(), 2);
    }

    #[test]
    fn winner_comes_from_the_current_state() {
        let state = "6/6/6/6/6/BB4 1 5-1 8-0".parse().unwrap();
        let mut game = Game::starting_at(state);
        assert_eq!(game.winner(), None);

        game.play_str("bc1").unwrap();
        assert_eq!(game.winner(), Some(Player::Player1));
        assert_eq!(game.state().phase(), &Phase::Finished(Player::Player1));
    }

    #[test]
    fn alternate_format_lists_resulting_states() {
        let mut game = Game::default();
        game.play_all("sc3 se5").unwrap();
        assert_eq!(format!("{:#}", game),
            "sc3       6/6/6/2S3/6/6 2 7-0 8-0\n\
             se5       6/4s1/6/2S3/6/6 1 7-0 7-0\n");
    }
}
