//! Defines the error types needed by the boop module
//!
//! Every fallible operation has its own error type, which carries a `*Kind` enum giving the
//! specific reason for the failure.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::{Coordinate, PiecePlacement, ThreeInRow};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when a string is not `1` or `2`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePlayerError;

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "player must be 1 or 2".fmt(f)
    }
}

impl std::error::Error for ParsePlayerError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error returned when an integer is out of range for the type it is converted to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromIntError;

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "integer out of range".fmt(f)
    }
}

impl std::error::Error for TryFromIntError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a string can't be parsed as a `Size`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeErrorKind {
    /// The string is empty
    Empty,
    /// The string is not a known size
    Unknown,
}

impl fmt::Display for SizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeErrorKind::Empty => "missing piece size",
            SizeErrorKind::Unknown => "piece size must be small (s) or big (b)",
        }.fmt(f)
    }
}

/// Error returned when parsing a `Size` fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseSizeError {
    kind: SizeErrorKind,
}

impl ParseSizeError {
    pub(crate) fn new(kind: SizeErrorKind) -> Self {
        ParseSizeError { kind }
    }

    /// Returns the reason parsing failed
    pub fn kind(&self) -> SizeErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseSizeError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a coordinate is invalid
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinateErrorKind {
    /// The string is empty
    Empty,
    /// The column is not a letter from `a` to `f`
    InvalidColumn,
    /// The row is not a number from `1` to `6`
    InvalidRow,
    /// A row or column index is off the board
    OutOfBounds,
}

impl fmt::Display for CoordinateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateErrorKind::Empty => "missing coordinate",
            CoordinateErrorKind::InvalidColumn => "column must be a letter from a to f",
            CoordinateErrorKind::InvalidRow => "row must be a number from 1 to 6",
            CoordinateErrorKind::OutOfBounds => "coordinate is off the board",
        }.fmt(f)
    }
}

/// Error returned when parsing or converting a `Coordinate` fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError {
    kind: CoordinateErrorKind,
}

impl ParseCoordinateError {
    pub(crate) fn new(kind: CoordinateErrorKind) -> Self {
        ParseCoordinateError { kind }
    }

    /// Returns the reason parsing failed
    pub fn kind(&self) -> CoordinateErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseCoordinateError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a string can't be parsed as a `PiecePlacement`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PiecePlacementErrorKind {
    /// The string is empty
    Empty,
    /// The string is not a size followed by a coordinate
    InvalidFormat,
    /// The size part is invalid
    Size(SizeErrorKind),
    /// The coordinate part is invalid
    Coordinate(CoordinateErrorKind),
}

impl fmt::Display for PiecePlacementErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiecePlacementErrorKind::Empty => "missing placement".fmt(f),
            PiecePlacementErrorKind::InvalidFormat =>
                "placement must be a size followed by a coordinate (eg sc3)".fmt(f),
            PiecePlacementErrorKind::Size(kind) => kind.fmt(f),
            PiecePlacementErrorKind::Coordinate(kind) => kind.fmt(f),
        }
    }
}

/// Error returned when parsing a `PiecePlacement` fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePiecePlacementError {
    kind: PiecePlacementErrorKind,
}

impl ParsePiecePlacementError {
    pub(crate) fn new(kind: PiecePlacementErrorKind) -> Self {
        ParsePiecePlacementError { kind }
    }

    /// Returns the reason parsing failed
    pub fn kind(&self) -> PiecePlacementErrorKind {
        self.kind
    }
}

impl fmt::Display for ParsePiecePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParsePiecePlacementError { }

impl From<ParseSizeError> for ParsePiecePlacementError {
    fn from(err: ParseSizeError) -> Self {
        ParsePiecePlacementError::new(PiecePlacementErrorKind::Size(err.kind()))
    }
}

impl From<ParseCoordinateError> for ParsePiecePlacementError {
    fn from(err: ParseCoordinateError) -> Self {
        ParsePiecePlacementError::new(PiecePlacementErrorKind::Coordinate(err.kind()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a string can't be parsed as an `Action`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionErrorKind {
    /// The string is empty
    Empty,
    /// The string is not a placement, a line, or a graduation
    InvalidFormat,
    /// The placement is invalid
    Placement(PiecePlacementErrorKind),
    /// One of the coordinates is invalid
    Coordinate(CoordinateErrorKind),
    /// The three coordinates are not a straight line of adjacent cells
    NotALine,
}

impl fmt::Display for ActionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionErrorKind::Empty => "missing action".fmt(f),
            ActionErrorKind::InvalidFormat => "unrecognized action".fmt(f),
            ActionErrorKind::Placement(kind) => kind.fmt(f),
            ActionErrorKind::Coordinate(kind) => kind.fmt(f),
            ActionErrorKind::NotALine => "cells are not three in a row".fmt(f),
        }
    }
}

/// Error returned when parsing an `Action` fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseActionError {
    kind: ActionErrorKind,
}

impl ParseActionError {
    pub(crate) fn new(kind: ActionErrorKind) -> Self {
        ParseActionError { kind }
    }

    /// Returns the reason parsing failed
    pub fn kind(&self) -> ActionErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseActionError { }

impl From<ParsePiecePlacementError> for ParseActionError {
    fn from(err: ParsePiecePlacementError) -> Self {
        ParseActionError::new(ActionErrorKind::Placement(err.kind()))
    }
}

impl From<ParseCoordinateError> for ParseActionError {
    fn from(err: ParseCoordinateError) -> Self {
        ParseActionError::new(ActionErrorKind::Coordinate(err.kind()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a cell can't be checked for lines of three
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellErrorKind {
    /// There is no piece in the cell
    Empty,
}

impl fmt::Display for CellErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellErrorKind::Empty => "cell is empty",
        }.fmt(f)
    }
}

/// Error returned by `GameState::check_cell`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CheckCellError {
    coordinate: Coordinate,
    kind: CellErrorKind,
}

impl CheckCellError {
    pub(crate) fn new(coordinate: Coordinate, kind: CellErrorKind) -> Self {
        CheckCellError { coordinate, kind }
    }

    /// Returns the cell that was checked
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the reason the check failed
    pub fn kind(&self) -> CellErrorKind {
        self.kind
    }
}

impl fmt::Display for CheckCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}: {}", self.coordinate, self.kind).fmt(f)
    }
}

impl std::error::Error for CheckCellError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a piece can't be placed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceErrorKind {
    /// The game has already been won
    GameOver,
    /// The player to move must first choose a line or a piece to graduate
    ChoicePending,
    /// The target cell already holds a piece
    CellOccupied,
    /// The player has no piece of that size left to place
    NoPieceAvailable,
}

impl fmt::Display for PieceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceErrorKind::GameOver => "the game is over",
            PieceErrorKind::ChoicePending => "a graduation choice must be made first",
            PieceErrorKind::CellOccupied => "cell is occupied",
            PieceErrorKind::NoPieceAvailable => "no piece of that size is available",
        }.fmt(f)
    }
}

/// Error returned by `GameState::place_piece`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlacePieceError {
    placement: PiecePlacement,
    kind: PieceErrorKind,
}

impl PlacePieceError {
    pub(crate) fn new(placement: PiecePlacement, kind: PieceErrorKind) -> Self {
        PlacePieceError { placement, kind }
    }

    /// Returns the rejected placement
    pub fn placement(&self) -> PiecePlacement {
        self.placement
    }

    /// Returns the reason the placement was rejected
    pub fn kind(&self) -> PieceErrorKind {
        self.kind
    }
}

impl fmt::Display for PlacePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}: {}", self.placement, self.kind).fmt(f)
    }
}

impl std::error::Error for PlacePieceError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a line can't be chosen for graduation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    /// The game is not waiting for a line to be chosen
    NotChoosing,
    /// The line is not one of the lines that can be chosen
    NotAnOption,
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineErrorKind::NotChoosing => "no line is waiting to be chosen",
            LineErrorKind::NotAnOption => "line is not one of the options",
        }.fmt(f)
    }
}

/// Error returned by `GameState::choose_line`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChooseLineError {
    line: ThreeInRow,
    kind: LineErrorKind,
}

impl ChooseLineError {
    pub(crate) fn new(line: ThreeInRow, kind: LineErrorKind) -> Self {
        ChooseLineError { line, kind }
    }

    /// Returns the rejected line
    pub fn line(&self) -> ThreeInRow {
        self.line
    }

    /// Returns the reason the line was rejected
    pub fn kind(&self) -> LineErrorKind {
        self.kind
    }
}

impl fmt::Display for ChooseLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}: {}", self.line, self.kind).fmt(f)
    }
}

impl std::error::Error for ChooseLineError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a single piece can't be graduated
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GraduateErrorKind {
    /// The game is not waiting for a piece to be graduated
    NotChoosing,
    /// There is no piece in the cell
    Empty,
    /// The piece belongs to the opponent
    NotOwnPiece,
}

impl fmt::Display for GraduateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraduateErrorKind::NotChoosing => "no piece is waiting to be graduated",
            GraduateErrorKind::Empty => "cell is empty",
            GraduateErrorKind::NotOwnPiece => "piece belongs to the opponent",
        }.fmt(f)
    }
}

/// Error returned by `GameState::graduate_piece`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraduatePieceError {
    coordinate: Coordinate,
    kind: GraduateErrorKind,
}

impl GraduatePieceError {
    pub(crate) fn new(coordinate: Coordinate, kind: GraduateErrorKind) -> Self {
        GraduatePieceError { coordinate, kind }
    }

    /// Returns the rejected cell
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the reason the graduation was rejected
    pub fn kind(&self) -> GraduateErrorKind {
        self.kind
    }
}

impl fmt::Display for GraduatePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}: {}", self.coordinate, self.kind).fmt(f)
    }
}

impl std::error::Error for GraduatePieceError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a string can't be parsed as a `GameState`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStateErrorKind {
    /// The string is empty
    Empty,
    /// The board field is malformed
    InvalidBoard,
    /// The turn field is not `1` or `2`
    InvalidTurn,
    /// A pool field is not `<small>-<big>`
    InvalidPool,
    /// Fewer than four fields
    MissingField,
    /// More than four fields
    ExtraField,
    /// The rules to parse with fail validation
    InvalidRules,
    /// A player's pieces on the board and in the pool don't add up to the number of pieces each
    /// player owns
    PieceCountMismatch,
}

impl fmt::Display for GameStateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStateErrorKind::Empty => "empty game state",
            GameStateErrorKind::InvalidBoard => "invalid board",
            GameStateErrorKind::InvalidTurn => "turn must be 1 or 2",
            GameStateErrorKind::InvalidPool => "pool must be <small>-<big>",
            GameStateErrorKind::MissingField => "missing field",
            GameStateErrorKind::ExtraField => "too many fields",
            GameStateErrorKind::InvalidRules => "invalid rules",
            GameStateErrorKind::PieceCountMismatch => "wrong number of pieces for a player",
        }.fmt(f)
    }
}

/// Error returned when parsing a `GameState` fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseGameStateError {
    kind: GameStateErrorKind,
}

impl ParseGameStateError {
    pub(crate) fn new(kind: GameStateErrorKind) -> Self {
        ParseGameStateError { kind }
    }

    /// Returns the reason parsing failed
    pub fn kind(&self) -> GameStateErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseGameStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseGameStateError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a set of rules can't be loaded
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RulesErrorKind {
    /// The rules file couldn't be read
    Io,
    /// The rules aren't valid YAML or have unknown fields
    Yaml,
    /// The number of pieces per player is out of range
    InvalidPieceCount,
}

/// Error returned when loading `Rules` fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRulesError {
    kind: RulesErrorKind,
    message: String,
}

impl LoadRulesError {
    pub(crate) fn new(kind: RulesErrorKind, message: String) -> Self {
        LoadRulesError { kind, message }
    }

    /// Returns the reason loading failed
    pub fn kind(&self) -> RulesErrorKind {
        self.kind
    }
}

impl fmt::Display for LoadRulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for LoadRulesError { }

impl From<std::io::Error> for LoadRulesError {
    fn from(err: std::io::Error) -> Self {
        LoadRulesError::new(RulesErrorKind::Io, err.to_string())
    }
}

impl From<serde_yaml::Error> for LoadRulesError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadRulesError::new(RulesErrorKind::Yaml, err.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type covering every failure in the `boop` module
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    CheckCell(CheckCellError),
    PlacePiece(PlacePieceError),
    ChooseLine(ChooseLineError),
    GraduatePiece(GraduatePieceError),
    ParseAction(ParseActionError),
    ParseGameState(ParseGameStateError),
    LoadRules(LoadRulesError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            CheckCell(err) => err.fmt(f),
            PlacePiece(err) => err.fmt(f),
            ChooseLine(err) => err.fmt(f),
            GraduatePiece(err) => err.fmt(f),
            ParseAction(err) => err.fmt(f),
            ParseGameState(err) => err.fmt(f),
            LoadRules(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error { }

impl From<CheckCellError> for Error {
    fn from(err: CheckCellError) -> Self {
        Error::CheckCell(err)
    }
}

impl From<PlacePieceError> for Error {
    fn from(err: PlacePieceError) -> Self {
        Error::PlacePiece(err)
    }
}

impl From<ChooseLineError> for Error {
    fn from(err: ChooseLineError) -> Self {
        Error::ChooseLine(err)
    }
}

impl From<GraduatePieceError> for Error {
    fn from(err: GraduatePieceError) -> Self {
        Error::GraduatePiece(err)
    }
}

impl From<ParseActionError> for Error {
    fn from(err: ParseActionError) -> Self {
        Error::ParseAction(err)
    }
}

impl From<ParseGameStateError> for Error {
    fn from(err: ParseGameStateError) -> Self {
        Error::ParseGameState(err)
    }
}

impl From<LoadRulesError> for Error {
    fn from(err: LoadRulesError) -> Self {
        Error::LoadRules(err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `boop` module
pub type Result<T> = std::result::Result<T, Error>;
