//! Rules of the board game boop, with game records, variation counts and random playouts.
//!
//! Players take turns placing small or big pieces on a 6x6 board. A placed piece pushes
//! ("boops") its neighbours one cell away. Three of a player's pieces in a row graduate into big
//! pieces, and three big pieces in a row win.
//!
//! ```
//! use boop_game::{GameState, Phase};
//!
//! let mut state = GameState::default();
//! let phase = state.place_piece("sc3".parse().unwrap()).unwrap();
//! assert_eq!(phase, &Phase::Placing);
//! assert_eq!(state.to_string(), "6/6/6/2S3/6/6 2 7-0 8-0");
//! ```
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]

pub mod boop;
pub mod playout;

pub use boop::{Player, Size, Piece, Cell, Coordinate};
pub use boop::{PiecePlacement, Direction, ThreeInRow, Rules, Action};
pub use boop::{GameState, Phase, Pool};
pub use boop::game::Game;
pub use boop::error::{Error, Result};
pub use boop::error::{ParsePlayerError, TryFromIntError, ParseSizeError, SizeErrorKind};
pub use boop::error::{ParseCoordinateError, CoordinateErrorKind};
pub use boop::error::{ParsePiecePlacementError, PiecePlacementErrorKind};
pub use boop::error::{ParseActionError, ActionErrorKind};
pub use boop::error::{CheckCellError, CellErrorKind, PlacePieceError, PieceErrorKind};
pub use boop::error::{ChooseLineError, LineErrorKind, GraduatePieceError, GraduateErrorKind};
pub use boop::error::{ParseGameStateError, GameStateErrorKind, LoadRulesError, RulesErrorKind};
pub use playout::{random_playout, Playout, Outcome};
