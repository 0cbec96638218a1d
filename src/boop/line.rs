//! Lines of three adjacent cells
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::Coordinate;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The orientation of a line of three cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Up and to the right (`a1`, `b2`, `c3`)
    LeftDiagonal,
    /// Up and to the left (`c1`, `b2`, `a3`)
    RightDiagonal,
}

impl Direction {
    /// Every direction, in the order lines are checked
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::LeftDiagonal,
        Direction::RightDiagonal,
    ];

    /// Returns the `(row, column)` step from one cell of the line to the next
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::LeftDiagonal => (1, 1),
            Direction::RightDiagonal => (1, -1),
        }
    }

    /// Returns the direction whose step is `delta` or its reverse
    fn from_delta(delta: (isize, isize)) -> Option<Direction> {
        Direction::ALL.iter()
            .copied()
            .find(|dir| dir.delta() == delta || dir.delta() == (-delta.0, -delta.1))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Three adjacent cells in a straight line, identified by the middle cell and the direction.
///
/// Written as the three coordinates joined by `-`, for example `a1-b2-c3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThreeInRow {
    center: Coordinate,
    direction: Direction,
}

impl ThreeInRow {
    /// Returns the line through `center` in `direction`, or `None` if either end is off the
    /// board.
    pub fn new(center: Coordinate, direction: Direction) -> Option<ThreeInRow> {
        let (drow, dcol) = direction.delta();
        center.offset(-drow, -dcol)?;
        center.offset(drow, dcol)?;

        Some(ThreeInRow { center, direction })
    }

    /// Returns the line made of `first`, `middle`, and `last`, in either order, or `None` if they
    /// aren't three adjacent cells in a straight line.
    pub fn from_cells(first: Coordinate, middle: Coordinate, last: Coordinate) -> Option<ThreeInRow> {
        let step = |from: Coordinate, to: Coordinate| {
            (to.row() as isize - from.row() as isize, to.column() as isize - from.column() as isize)
        };

        let delta = step(first, middle);
        if delta != step(middle, last) {
            return None;
        }

        ThreeInRow::new(middle, Direction::from_delta(delta)?)
    }

    /// Returns the middle cell
    pub fn center(self) -> Coordinate {
        self.center
    }

    /// Returns the direction of the line
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the three cells of the line, starting behind the center and ending in front of it
    pub fn cells(self) -> [Coordinate; 3] {
        let (drow, dcol) = self.direction.delta();
        [
            self.center.offset(-drow, -dcol).expect("INFALLIBLE"),
            self.center,
            self.center.offset(drow, dcol).expect("INFALLIBLE"),
        ]
    }
}

impl fmt::Display for ThreeInRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, middle, last] = self.cells();
        format!("{}-{}-{}", first, middle, last).fmt(f)
    }
}
