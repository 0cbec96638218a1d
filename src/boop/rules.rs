//! Configurable rule variations
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fs::read_to_string;
use std::path::Path;
use serde::{Serialize, Deserialize};
use super::Coordinate;
use super::error::{LoadRulesError, RulesErrorKind};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Rule settings for a game. Missing fields take their default value when read from YAML.
///
/// ```
/// use boop_game::Rules;
/// let rules = Rules::from_yaml_str("pieces_per_player: 6").unwrap();
/// assert_eq!(rules.pieces_per_player, 6);
/// assert!(!rules.small_boops_big);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// The number of pieces each player owns. Defaults to 8.
    pub pieces_per_player: u8,
    /// Whether placing a small piece pushes big pieces. Defaults to `false`.
    pub small_boops_big: bool,
    /// Whether a player wins by having all of their pieces on the board as big pieces. Defaults
    /// to `true`.
    pub win_with_all_big_placed: bool,
}

impl Rules {
    /// The smallest number of pieces per player (enough for a line of three)
    pub const MIN_PIECES: u8 = 3;

    /// The largest number of pieces per player (half the board)
    pub const MAX_PIECES: u8 = (Coordinate::COUNT / 2) as u8;

    /// Reads rules from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Rules, LoadRulesError> {
        let rules: Rules = serde_yaml::from_str(s)?;
        rules.validate()?;

        Ok(rules)
    }

    /// Reads rules from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Rules, LoadRulesError> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|err| {
            LoadRulesError::new(RulesErrorKind::Io, format!("{}: {}", path.display(), err))
        })?;

        Rules::from_yaml_str(&s)
    }

    /// Writes the rules as YAML
    pub fn to_yaml_string(&self) -> Result<String, LoadRulesError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that the settings can be played with
    pub fn validate(&self) -> Result<(), LoadRulesError> {
        if self.pieces_per_player < Self::MIN_PIECES || self.pieces_per_player > Self::MAX_PIECES {
            Err(LoadRulesError::new(RulesErrorKind::InvalidPieceCount, format!(
                "pieces_per_player must be from {} to {}, not {}",
                Self::MIN_PIECES, Self::MAX_PIECES, self.pieces_per_player)))
        } else {
            Ok(())
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            pieces_per_player: 8,
            small_boops_big: false,
            win_with_all_big_placed: true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Rules::from_yaml_str("{}").unwrap(), Rules::default());
    }

    #[test]
    fn fields_override_defaults() {
        let rules = Rules::from_yaml_str(
            "pieces_per_player: 10\nsmall_boops_big: true\nwin_with_all_big_placed: false\n"
        ).unwrap();
        assert_eq!(rules, Rules {
            pieces_per_player: 10,
            small_boops_big: true,
            win_with_all_big_placed: false,
        });
    }

    #[test]
    fn yaml_round_trip() {
        let rules = Rules { pieces_per_player: 5, ..Rules::default() };
        let s = rules.to_yaml_string().unwrap();
        assert_eq!(Rules::from_yaml_str(&s).unwrap(), rules);
    }

    #[test]
    fn bad_documents_are_yaml_errors() {
        assert_eq!(Rules::from_yaml_str("colour: blue").unwrap_err().kind(), RulesErrorKind::Yaml);
        assert_eq!(Rules::from_yaml_str("pieces_per_player: lots").unwrap_err().kind(),
            RulesErrorKind::Yaml);
    }

    #[test]
    fn piece_count_is_validated() {
        assert_eq!(Rules::from_yaml_str("pieces_per_player: 2").unwrap_err().kind(),
            RulesErrorKind::InvalidPieceCount);
        assert_eq!(Rules::from_yaml_str("pieces_per_player: 19").unwrap_err().kind(),
            RulesErrorKind::InvalidPieceCount);
        assert!(Rules::from_yaml_str("pieces_per_player: 18").is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert_eq!(Rules::from_file("/nonexistent/boop-rules.yaml").unwrap_err().kind(),
            RulesErrorKind::Io);
    }
}
