//! The `boop` module implements the rules of boop.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops;
use std::fmt;
use std::str::FromStr;
use std::convert::TryFrom;
use error::{ParsePlayerError, TryFromIntError};
use error::{SizeErrorKind, ParseSizeError, CoordinateErrorKind, ParseCoordinateError};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the two players.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The number of players
    pub const COUNT: usize = 2;
}

impl ops::Not for Player {
    type Output = Player;

    /// Returns the opponent
    ///
    /// # Example
    /// ```
    /// use boop_game::Player;
    /// assert_eq!(!Player::Player1, Player::Player2);
    /// assert_eq!(!Player::Player2, Player::Player1);
    /// ```
    fn not(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => '1'.fmt(f),
            Player::Player2 => '2'.fmt(f),
        }
    }
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Player::Player1),
            "2" => Ok(Player::Player2),
            _   => Err(ParsePlayerError),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::Player1
    }
}

impl TryFrom<usize> for Player {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::Player1),
            1 => Ok(Player::Player2),
            _ => Err(TryFromIntError),
        }
    }
}

impl From<Player> for usize {
    fn from(value: Player) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The size of a piece. Small pieces graduate into big ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Size {
    Small,
    Big,
}

impl Size {
    /// The number of sizes
    pub const COUNT: usize = 2;
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => "s",
            Size::Big => "b",
        }.fmt(f)
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Err(ParseSizeError::new(SizeErrorKind::Empty)),
            "s" | "small" => Ok(Size::Small),
            "b" | "big" => Ok(Size::Big),
            _ => Err(ParseSizeError::new(SizeErrorKind::Unknown)),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::Small
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A piece belonging to one of the players.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The player the piece belongs to
    pub owner: Player,
    /// Whether the piece is small or big
    pub size: Size,
}

impl Piece {
    /// Creates a piece
    pub fn new(owner: Player, size: Size) -> Piece {
        Piece { owner, size }
    }

    /// Returns the piece for its one-letter notation, if `c` is one.
    ///
    /// Upper case letters are `Player1`'s pieces, lower case letters `Player2`'s.
    pub fn from_char(c: char) -> Option<Piece> {
        let owner = if c.is_ascii_uppercase() { Player::Player1 } else { Player::Player2 };
        match c.to_ascii_lowercase() {
            's' => Some(Piece::new(owner, Size::Small)),
            'b' => Some(Piece::new(owner, Size::Big)),
            _ => None,
        }
    }

    /// Returns the one-letter notation for the piece
    pub fn to_char(self) -> char {
        let c = match self.size {
            Size::Small => 's',
            Size::Big => 'b',
        };
        match self.owner {
            Player::Player1 => c.to_ascii_uppercase(),
            Player::Player2 => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char().fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The contents of one cell of the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No piece
    Empty,
    /// Holds the given piece
    Piece(Piece),
}

impl Cell {
    /// Returns the piece in the cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Piece(piece) => Some(piece),
        }
    }

    /// Returns true if the cell holds no piece
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A cell on the board, given by its row and column.
///
/// In text, the column is a letter from `a` to `f` and the row a number from `1` to `6`, so `a1`
/// is row 0, column 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// The number of rows and columns on the board
    pub const SIZE: usize = 6;

    /// The number of cells on the board
    pub const COUNT: usize = Coordinate::SIZE * Coordinate::SIZE;

    /// Returns the coordinate for `row` and `column`, or `None` if it is not on the board
    pub fn new(row: usize, column: usize) -> Option<Coordinate> {
        if row < Self::SIZE && column < Self::SIZE {
            Some(Coordinate { row: row as u8, column: column as u8 })
        } else {
            None
        }
    }

    /// Returns the row, from 0 to 5
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column, from 0 to 5
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Returns the position of the coordinate in row-major order
    pub fn index(self) -> usize {
        self.row() * Self::SIZE + self.column()
    }

    /// Returns the coordinate `drow` rows and `dcol` columns away, or `None` if that is off the
    /// board.
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Coordinate> {
        let row = self.row as isize + drow;
        let column = self.column as isize + dcol;
        if row < 0 || column < 0 {
            None
        } else {
            Coordinate::new(row as usize, column as usize)
        }
    }

    /// Returns an iterator over every coordinate on the board in row-major order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::COUNT).map(|i| Coordinate { row: (i / Self::SIZE) as u8, column: (i % Self::SIZE) as u8 })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'a' + self.column) as char;
        format!("{}{}", column, self.row + 1).fmt(f)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let column = match chars.next() {
            None => return Err(ParseCoordinateError::new(CoordinateErrorKind::Empty)),
            Some(c) => match c.to_ascii_lowercase() {
                c @ 'a' ..= 'f' => c as usize - 'a' as usize,
                _ => return Err(ParseCoordinateError::new(CoordinateErrorKind::InvalidColumn)),
            },
        };

        let row = match (chars.next(), chars.next()) {
            (Some(c @ '1' ..= '6'), None) => c as u8 - b'1',
            _ => return Err(ParseCoordinateError::new(CoordinateErrorKind::InvalidRow)),
        };

        Ok(Coordinate { row, column: column as u8 })
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = ParseCoordinateError;

    /// Converts a `(row, column)` pair
    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Coordinate::new(row, column)
            .ok_or_else(|| ParseCoordinateError::new(CoordinateErrorKind::OutOfBounds))
    }
}

impl From<Coordinate> for usize {
    fn from(value: Coordinate) -> Self {
        value.index()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod error;
mod placement;
pub use placement::PiecePlacement;
mod line;
pub use line::{Direction, ThreeInRow};
pub mod rules;
pub use rules::Rules;
mod action;
pub use action::Action;
pub mod state;
pub use state::{GameState, Phase, Pool};
pub mod game;
pub mod variations;


#[cfg(test)]
mod size_tests {
    use super::Size;
    use super::error::SizeErrorKind;

    #[test]
    fn display_trait_works() {
        assert_eq!(format!("{}", Size::Small), "s");
        assert_eq!(format!("{}", Size::Big), "b");
    }

    #[test]
    fn fromstr_accepts_letters_and_words() {
        assert_eq!("s".parse::<Size>().unwrap(), Size::Small);
        assert_eq!("B".parse::<Size>().unwrap(), Size::Big);
        assert_eq!("small".parse::<Size>().unwrap(), Size::Small);
        assert_eq!("Big".parse::<Size>().unwrap(), Size::Big);
    }

    #[test]
    fn fromstr_reports_the_error_kind() {
        assert_eq!("".parse::<Size>().unwrap_err().kind(), SizeErrorKind::Empty);
        assert_eq!("medium".parse::<Size>().unwrap_err().kind(), SizeErrorKind::Unknown);
    }
}

#[cfg(test)]
mod piece_tests {
    use super::*;

    #[test]
    fn letters_encode_owner_and_size() {
        assert_eq!(Piece::new(Player::Player1, Size::Small).to_char(), 'S');
        assert_eq!(Piece::new(Player::Player1, Size::Big).to_char(), 'B');
        assert_eq!(Piece::new(Player::Player2, Size::Small).to_char(), 's');
        assert_eq!(Piece::new(Player::Player2, Size::Big).to_char(), 'b');
    }

    #[test]
    fn from_char_matches_to_char() {
        for c in "SBsb".chars() {
            assert_eq!(Piece::from_char(c).unwrap().to_char(), c);
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Piece(Piece::new(Player::Player2, Size::Big)).piece(),
            Some(Piece::new(Player::Player2, Size::Big)));
    }
}

#[cfg(test)]
mod coordinate_tests {
    use std::convert::TryFrom;
    use super::Coordinate;
    use super::error::CoordinateErrorKind;

    #[test]
    fn display_and_fromstr_traits_match_row_and_column() {
        for c in Coordinate::all() {
            let s = c.to_string();
            assert_eq!(s.parse::<Coordinate>().unwrap(), c);
        }
        assert_eq!(Coordinate::new(0, 0).unwrap().to_string(), "a1");
        assert_eq!(Coordinate::new(5, 2).unwrap().to_string(), "c6");
        assert_eq!("F6".parse::<Coordinate>().unwrap(), Coordinate::new(5, 5).unwrap());
    }

    #[test]
    fn fromstr_trait_produces_errors_when_it_should() {
        assert_eq!("".parse::<Coordinate>().unwrap_err().kind(), CoordinateErrorKind::Empty);
        assert_eq!("g1".parse::<Coordinate>().unwrap_err().kind(),
            CoordinateErrorKind::InvalidColumn);
        assert_eq!("a0".parse::<Coordinate>().unwrap_err().kind(),
            CoordinateErrorKind::InvalidRow);
        assert_eq!("a7".parse::<Coordinate>().unwrap_err().kind(),
            CoordinateErrorKind::InvalidRow);
        assert_eq!("a".parse::<Coordinate>().unwrap_err().kind(),
            CoordinateErrorKind::InvalidRow);
        assert_eq!("a1x".parse::<Coordinate>().unwrap_err().kind(),
            CoordinateErrorKind::InvalidRow);
        for s in &["a+1", "a01", "b+6", "c 3", "d-1"] {
            assert_eq!(s.parse::<Coordinate>().unwrap_err().kind(),
                CoordinateErrorKind::InvalidRow, "{}", s);
        }
    }

    #[test]
    fn tuple_conversion_checks_bounds() {
        assert_eq!(Coordinate::try_from((2, 3)).unwrap(), Coordinate::new(2, 3).unwrap());
        assert_eq!(Coordinate::try_from((0, 2)).unwrap().to_string(), "c1");
        assert_eq!(Coordinate::try_from((5, 0)).unwrap().to_string(), "a6");
        assert_eq!(Coordinate::try_from((6, 0)).unwrap_err().kind(),
            CoordinateErrorKind::OutOfBounds);
    }

    #[test]
    fn offset_stays_on_the_board() {
        let a1 = Coordinate::new(0, 0).unwrap();
        assert_eq!(a1.offset(1, 1), Coordinate::new(1, 1));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Coordinate::new(5, 5).unwrap().offset(0, 1), None);
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), Coordinate::COUNT);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
