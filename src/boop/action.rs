//! Actions a player can take on their turn
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::{RegexSet, Regex};
use super::{Coordinate, PiecePlacement, ThreeInRow};
use super::error::{ParseActionError, ActionErrorKind};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Anything a player can do when it is their turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece on the board.
    ///
    /// ```text
    /// <size><coordinate>
    /// ```
    Place(PiecePlacement),

    /// Pick which of several lines of three to graduate.
    ///
    /// ```text
    /// <coordinate>-<coordinate>-<coordinate>
    /// ```
    ChooseLine(ThreeInRow),

    /// Pick one piece to graduate when all of the player's pieces are on the board.
    ///
    /// ```text
    /// +<coordinate>
    /// ```
    Graduate(Coordinate),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(placement) => placement.fmt(f),
            Action::ChooseLine(line) => line.fmt(f),
            Action::Graduate(coordinate) => format!("+{}", coordinate).fmt(f),
        }
    }
}

impl From<PiecePlacement> for Action {
    fn from(placement: PiecePlacement) -> Self {
        Action::Place(placement)
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseActionError::new(ActionErrorKind::Empty));
        }

        if let Some(ind) = ACTION_SET.matches(s).iter().next() {
            let args = ACTION_VEC[ind].captures(s).expect("INFALLIBLE");

            match ind {
                0 => Ok(Action::Place(s.parse()?)),
                1 => {
                    let first = args.get(1).expect("INFALLIBLE").as_str().parse()?;
                    let middle = args.get(2).expect("INFALLIBLE").as_str().parse()?;
                    let last = args.get(3).expect("INFALLIBLE").as_str().parse()?;
                    ThreeInRow::from_cells(first, middle, last)
                        .map(Action::ChooseLine)
                        .ok_or_else(|| ParseActionError::new(ActionErrorKind::NotALine))
                },
                2 => Ok(Action::Graduate(args.get(1).expect("INFALLIBLE").as_str().parse()?)),
                _ => unreachable!(),
            }
        } else {
            Err(ParseActionError::new(ActionErrorKind::InvalidFormat))
        }
    }
}

const ACTIONS: [&str; 3] = [
    r"^[A-Za-z]+[\s@]*[A-Za-z][0-9]+$",
    r"^([A-Za-z][0-9]+)\s*-\s*([A-Za-z][0-9]+)\s*-\s*([A-Za-z][0-9]+)$",
    r"^\+\s*([A-Za-z][0-9]+)$",
];

lazy_static! {
    static ref ACTION_SET: RegexSet = RegexSet::new(&ACTIONS).expect("INFALLIBLE");
    static ref ACTION_VEC: Vec<Regex> = {
        let mut action_vec = Vec::new();
        for action in &ACTIONS {
            action_vec.push(Regex::new(action).expect("INFALLIBLE"));
        }
        action_vec
    };
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::boop::{Size, Direction};
    use crate::boop::error::{CoordinateErrorKind, PiecePlacementErrorKind, SizeErrorKind};

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn format_action() {
        assert_eq!(Action::Place(PiecePlacement::new(Size::Big, coord("e5"))).to_string(), "be5");
        assert_eq!(
            Action::ChooseLine(ThreeInRow::new(coord("b1"), Direction::Horizontal).unwrap())
                .to_string(),
            "a1-b1-c1");
        assert_eq!(Action::Graduate(coord("d2")).to_string(), "+d2");
    }

    #[test]
    fn parse_action() {
        assert_eq!(Ok(Action::Place(PiecePlacement::new(Size::Small, coord("a6")))),
            "sa6".parse());
        assert_eq!(Ok(Action::Place(PiecePlacement::new(Size::Big, coord("c2")))),
            "big c2".parse());
        assert_eq!(
            Ok(Action::ChooseLine(ThreeInRow::new(coord("b2"), Direction::LeftDiagonal).unwrap())),
            "c3-b2-a1".parse());
        assert_eq!(Ok(Action::Graduate(coord("f1"))), "+ f1".parse());
    }

    #[test]
    fn parse_errors_carry_their_kind() {
        assert_eq!("".parse::<Action>().unwrap_err().kind(), ActionErrorKind::Empty);
        assert_eq!("quit".parse::<Action>().unwrap_err().kind(), ActionErrorKind::InvalidFormat);
        assert_eq!("a1-b1-d1".parse::<Action>().unwrap_err().kind(), ActionErrorKind::NotALine);
        assert_eq!("a1-b1-g1".parse::<Action>().unwrap_err().kind(),
            ActionErrorKind::Coordinate(CoordinateErrorKind::InvalidColumn));
        assert_eq!("+a9".parse::<Action>().unwrap_err().kind(),
            ActionErrorKind::Coordinate(CoordinateErrorKind::InvalidRow));
        assert_eq!("hugec3".parse::<Action>().unwrap_err().kind(),
            ActionErrorKind::Placement(PiecePlacementErrorKind::Size(SizeErrorKind::Unknown)));
    }
}
