//! Placement of a piece on the board
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use super::{Size, Coordinate};
use super::error::{ParsePiecePlacementError, PiecePlacementErrorKind};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move that puts a piece of the given size from the mover's pool on the board.
///
/// Written as the size followed by the coordinate, for example `sc3` or `bf6`. When parsing, the
/// size may also be spelled out and separated from the coordinate (`small c3`, `big@f6`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PiecePlacement {
    /// The size of the piece to place
    pub size: Size,
    /// Where to place the piece
    pub coordinate: Coordinate,
}

impl PiecePlacement {
    /// Creates a placement
    pub fn new(size: Size, coordinate: Coordinate) -> Self {
        PiecePlacement { size, coordinate }
    }
}

impl fmt::Display for PiecePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}{}", self.size, self.coordinate).fmt(f)
    }
}

impl FromStr for PiecePlacement {
    type Err = ParsePiecePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePiecePlacementError::new(PiecePlacementErrorKind::Empty));
        }

        let args = PLACEMENT.captures(s)
            .ok_or_else(|| ParsePiecePlacementError::new(PiecePlacementErrorKind::InvalidFormat))?;
        let size = args.get(1).expect("INFALLIBLE").as_str().parse()?;
        let coordinate = args.get(2).expect("INFALLIBLE").as_str().parse()?;

        Ok(PiecePlacement { size, coordinate })
    }
}

lazy_static! {
    static ref PLACEMENT: Regex =
        Regex::new(r"^([A-Za-z]+)[\s@]*([A-Za-z][0-9]+)$").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::boop::error::{SizeErrorKind, CoordinateErrorKind};

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn format_placement() {
        assert_eq!(PiecePlacement::new(Size::Small, coord("c3")).to_string(), "sc3");
        assert_eq!(PiecePlacement::new(Size::Big, coord("f6")).to_string(), "bf6");
    }

    #[test]
    fn parse_placement() {
        assert_eq!(Ok(PiecePlacement::new(Size::Small, coord("c3"))), "sc3".parse());
        assert_eq!(Ok(PiecePlacement::new(Size::Big, coord("f6"))), "BF6".parse());
        assert_eq!(Ok(PiecePlacement::new(Size::Small, coord("a1"))), "small a1".parse());
        assert_eq!(Ok(PiecePlacement::new(Size::Big, coord("d4"))), " big@d4 ".parse());
    }

    #[test]
    fn parse_errors_carry_their_kind() {
        use PiecePlacementErrorKind as Kind;

        assert_eq!("".parse::<PiecePlacement>().unwrap_err().kind(), Kind::Empty);
        assert_eq!("c3".parse::<PiecePlacement>().unwrap_err().kind(), Kind::InvalidFormat);
        assert_eq!("s-c3".parse::<PiecePlacement>().unwrap_err().kind(), Kind::InvalidFormat);
        assert_eq!("xc3".parse::<PiecePlacement>().unwrap_err().kind(),
            Kind::Size(SizeErrorKind::Unknown));
        assert_eq!("sg3".parse::<PiecePlacement>().unwrap_err().kind(),
            Kind::Coordinate(CoordinateErrorKind::InvalidColumn));
        assert_eq!("sc9".parse::<PiecePlacement>().unwrap_err().kind(),
            Kind::Coordinate(CoordinateErrorKind::InvalidRow));
    }
}
