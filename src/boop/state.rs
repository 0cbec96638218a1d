//! The state of a game of boop: the board, the pools of unplayed pieces, and whose turn it is.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use log::{debug, info, trace};
use super::{Player, Size, Piece, Cell, Coordinate, PiecePlacement, Direction, ThreeInRow};
use super::{Rules, Action};
use super::error::{ParseGameStateError, GameStateErrorKind, CheckCellError, CellErrorKind};
use super::error::{PlacePieceError, PieceErrorKind, ChooseLineError, LineErrorKind};
use super::error::{GraduatePieceError, GraduateErrorKind, LoadRulesError};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The pieces a player has off the board, available to be placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pool {
    small: u8,
    big: u8,
}

impl Pool {
    /// Creates a pool holding the given number of small and big pieces
    pub fn new(small: u8, big: u8) -> Self {
        Pool { small, big }
    }

    /// Returns the number of pieces of `size` in the pool
    pub fn count(self, size: Size) -> usize {
        match size {
            Size::Small => self.small as usize,
            Size::Big => self.big as usize,
        }
    }

    /// Returns the number of pieces in the pool
    pub fn total(self) -> usize {
        self.small as usize + self.big as usize
    }

    /// Returns true if the pool has no pieces
    pub fn is_empty(self) -> bool {
        self.total() == 0
    }

    /// Removes a piece of `size`. Returns false if there is none.
    fn take(&mut self, size: Size) -> bool {
        let count = match size {
            Size::Small => &mut self.small,
            Size::Big => &mut self.big,
        };

        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    /// Adds a piece of `size`
    fn put(&mut self, size: Size) {
        match size {
            Size::Small => self.small += 1,
            Size::Big => self.big += 1,
        }
    }
}

impl fmt::Display for Pool {
    /// Written as `<small>-<big>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}-{}", self.small, self.big).fmt(f)
    }
}

impl FromStr for Pool {
    type Err = ParseGameStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseGameStateError::new(GameStateErrorKind::InvalidPool);

        let count = |digits: Option<&str>| match digits {
            Some(d) if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()) => {
                d.parse().map_err(|_| invalid())
            },
            _ => Err(invalid()),
        };

        let mut counts = s.splitn(2, '-');
        let small = count(counts.next())?;
        let big = count(counts.next())?;

        Ok(Pool { small, big })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// What the game is waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The player to move must place a piece.
    Placing,
    /// The player to move made more than one line of three and must choose which to graduate.
    ChoosingLine(Vec<ThreeInRow>),
    /// The player to move has all of their pieces on the board and must choose one to graduate.
    ChoosingGraduate,
    /// The game has been won by the given player.
    Finished(Player),
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A complete game state.
///
/// For each player, the number of pieces on the board plus the number in their pool is always
/// `rules.pieces_per_player`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: [Cell; Coordinate::COUNT],
    turn: Player,
    pools: [Pool; Player::COUNT],
    phase: Phase,
    rules: Rules,
}

impl GameState {
    /// Returns the starting state for `rules`: an empty board with every piece small and in its
    /// owner's pool, and `Player1` to move.
    ///
    /// # Errors
    ///
    /// Returns an error if `rules` fail `Rules::validate`.
    pub fn new(rules: Rules) -> Result<GameState, LoadRulesError> {
        rules.validate()?;

        Ok(GameState::starting(rules))
    }

    /// The starting state for rules already known to be valid
    fn starting(rules: Rules) -> GameState {
        let pool = Pool::new(rules.pieces_per_player, 0);

        GameState {
            board: [Cell::Empty; Coordinate::COUNT],
            turn: Player::Player1,
            pools: [pool; Player::COUNT],
            phase: Phase::Placing,
            rules,
        }
    }

    /// Returns the rules the game is played with
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the player whose turn it is
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns what the game is waiting for
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the winner, if the game is over
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished(player) => Some(player),
            _ => None,
        }
    }

    /// Returns `player`'s pool
    pub fn pool(&self, player: Player) -> Pool {
        self.pools[player as usize]
    }

    /// Returns the contents of the cell at `coordinate`
    pub fn cell(&self, coordinate: Coordinate) -> Cell {
        self.board[coordinate.index()]
    }

    /// Returns an iterator over the pieces on the board and where they are
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |c| self.cell(c).piece().map(|piece| (c, piece)))
    }

    /// Returns the number of `player`'s pieces on the board, optionally only those of `size`
    pub fn on_board(&self, player: Player, size: Option<Size>) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner == player && size.map_or(true, |s| piece.size == s))
            .count()
    }

    /// Returns the lines of three centered on `coordinate` whose cells all hold pieces of the same
    /// player as the piece at `coordinate`. Pieces of both sizes count.
    ///
    /// Lines are checked in the order of `Direction::ALL`. Directions in which the line would
    /// leave the board are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is empty.
    pub fn check_cell(&self, coordinate: Coordinate) -> Result<Vec<ThreeInRow>, CheckCellError> {
        let owner = self.cell(coordinate)
            .piece()
            .ok_or_else(|| CheckCellError::new(coordinate, CellErrorKind::Empty))?
            .owner;

        Ok(Direction::ALL.iter()
            .filter_map(|&dir| ThreeInRow::new(coordinate, dir))
            .filter(|line| {
                line.cells().iter().all(|&c| self.cell(c).piece().map(|p| p.owner) == Some(owner))
            })
            .collect())
    }

    /// Returns every line of three on the board, ordered by their center cells
    pub fn check_board(&self) -> Vec<ThreeInRow> {
        Coordinate::all()
            .filter_map(|c| self.check_cell(c).ok())
            .flatten()
            .collect()
    }

    /// Returns every line of three belonging to `player`
    pub fn lines_of(&self, player: Player) -> Vec<ThreeInRow> {
        self.check_board()
            .into_iter()
            .filter(|&line| self.line_owner(line) == Some(player))
            .collect()
    }

    /// Returns the owner of the piece at the center of `line`
    fn line_owner(&self, line: ThreeInRow) -> Option<Player> {
        self.cell(line.center()).piece().map(|piece| piece.owner)
    }

    /// Returns true if every cell of `line` holds a big piece
    fn is_all_big(&self, line: ThreeInRow) -> bool {
        line.cells().iter().all(|&c| self.cell(c).piece().map(|p| p.size) == Some(Size::Big))
    }

    /// Places a piece for the player to move, boops the neighbouring pieces, and resolves any lines
    /// of three or wins that result.
    ///
    /// Returns the new phase. If it is `Phase::Placing` the turn has passed to the opponent;
    /// otherwise the same player must make a choice, or the game is over.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the state unchanged, if the game is over, a choice must be made
    /// first, the cell is occupied, or the player has no piece of that size in their pool.
    pub fn place_piece(&mut self, placement: PiecePlacement) -> Result<&Phase, PlacePieceError> {
        use PieceErrorKind::*;

        let err = |kind| PlacePieceError::new(placement, kind);

        match self.phase {
            Phase::Placing => { },
            Phase::Finished(_) => return Err(err(GameOver)),
            Phase::ChoosingLine(_) | Phase::ChoosingGraduate => return Err(err(ChoicePending)),
        }
        if !self.cell(placement.coordinate).is_empty() {
            return Err(err(CellOccupied));
        }

        let mover = self.turn;
        if !self.pools[mover as usize].take(placement.size) {
            return Err(err(NoPieceAvailable));
        }

        debug!("player {} places {}", mover, placement);
        let piece = Piece::new(mover, placement.size);
        self.board[placement.coordinate.index()] = Cell::Piece(piece);
        self.boop(placement.coordinate, piece);
        self.resolve();

        Ok(&self.phase)
    }

    /// Graduates `line`, which must be one of the lines offered by `Phase::ChoosingLine`, and
    /// passes the turn.
    pub fn choose_line(&mut self, line: ThreeInRow) -> Result<&Phase, ChooseLineError> {
        match &self.phase {
            Phase::ChoosingLine(options) => {
                if !options.contains(&line) {
                    return Err(ChooseLineError::new(line, LineErrorKind::NotAnOption));
                }
            },
            _ => return Err(ChooseLineError::new(line, LineErrorKind::NotChoosing)),
        }

        debug!("player {} chooses {}", self.turn, line);
        self.graduate_line(line);
        self.end_turn();

        Ok(&self.phase)
    }

    /// Graduates the mover's piece at `coordinate` while in `Phase::ChoosingGraduate`: the piece
    /// leaves the board and a big piece joins the mover's pool. Passes the turn.
    pub fn graduate_piece(&mut self, coordinate: Coordinate) -> Result<&Phase, GraduatePieceError> {
        use GraduateErrorKind::*;

        if self.phase != Phase::ChoosingGraduate {
            return Err(GraduatePieceError::new(coordinate, NotChoosing));
        }
        match self.cell(coordinate).piece() {
            None => return Err(GraduatePieceError::new(coordinate, Empty)),
            Some(piece) if piece.owner != self.turn => {
                return Err(GraduatePieceError::new(coordinate, NotOwnPiece));
            },
            Some(_) => { },
        }

        debug!("player {} graduates {}", self.turn, coordinate);
        self.board[coordinate.index()] = Cell::Empty;
        self.pools[self.turn as usize].put(Size::Big);
        self.end_turn();

        Ok(&self.phase)
    }

    /// Carries out `action`
    pub fn apply(&mut self, action: &Action) -> super::error::Result<&Phase> {
        match *action {
            Action::Place(placement) => Ok(self.place_piece(placement)?),
            Action::ChooseLine(line) => Ok(self.choose_line(line)?),
            Action::Graduate(coordinate) => Ok(self.graduate_piece(coordinate)?),
        }
    }

    /// Returns every legal action for the player to move
    pub fn actions(&self) -> Vec<Action> {
        match &self.phase {
            Phase::Placing => {
                let pool = self.pool(self.turn);
                let mut actions = Vec::new();

                for c in Coordinate::all().filter(|&c| self.cell(c).is_empty()) {
                    for &size in [Size::Small, Size::Big].iter() {
                        if pool.count(size) > 0 {
                            actions.push(Action::Place(PiecePlacement::new(size, c)));
                        }
                    }
                }

                actions
            },
            Phase::ChoosingLine(lines) => lines.iter().map(|&line| Action::ChooseLine(line)).collect(),
            Phase::ChoosingGraduate => {
                let turn = self.turn;
                self.pieces()
                    .filter(|(_, piece)| piece.owner == turn)
                    .map(|(c, _)| Action::Graduate(c))
                    .collect()
            },
            Phase::Finished(_) => Vec::new(),
        }
    }

    /// Pushes every piece next to `origin` one cell further away, unless the cell beyond is
    /// occupied. Pieces pushed off the board return to their owner's pool.
    ///
    /// No piece can be pushed into a cell another push vacates or fills, so the order of the
    /// directions doesn't matter.
    fn boop(&mut self, origin: Coordinate, placed: Piece) {
        for drow in -1..=1 {
            for dcol in -1..=1 {
                if drow == 0 && dcol == 0 {
                    continue;
                }

                let neighbour = match origin.offset(drow, dcol) {
                    Some(c) => c,
                    None => continue,
                };
                let pushed = match self.cell(neighbour).piece() {
                    Some(piece) => piece,
                    None => continue,
                };
                if placed.size == Size::Small && pushed.size == Size::Big
                    && !self.rules.small_boops_big {
                    continue;
                }

                match neighbour.offset(drow, dcol) {
                    None => {
                        trace!("{} booped off the board from {}", pushed, neighbour);
                        self.board[neighbour.index()] = Cell::Empty;
                        self.pools[pushed.owner as usize].put(pushed.size);
                    },
                    Some(target) if self.cell(target).is_empty() => {
                        trace!("{} booped from {} to {}", pushed, neighbour, target);
                        self.board[neighbour.index()] = Cell::Empty;
                        self.board[target.index()] = Cell::Piece(pushed);
                    },
                    Some(target) => {
                        trace!("{} at {} blocked by {}", pushed, neighbour, target);
                    },
                }
            }
        }
    }

    /// Decides what happens after the mover's placement.
    fn resolve(&mut self) {
        let mover = self.turn;

        if let Some(winner) = self.find_winner() {
            self.finish(winner);
            return;
        }

        let mut lines = self.lines_of(mover);
        match lines.len() {
            0 if self.pool(mover).is_empty() => {
                debug!("player {} must graduate a piece", mover);
                self.phase = Phase::ChoosingGraduate;
            },
            0 => self.end_turn(),
            1 => {
                let line = lines.remove(0);
                self.graduate_line(line);
                self.end_turn();
            },
            _ => {
                debug!("player {} must choose from {} lines", mover, lines.len());
                self.phase = Phase::ChoosingLine(lines);
            },
        }
    }

    /// Returns the player who has won, checking the player to move first.
    fn find_winner(&self) -> Option<Player> {
        let mover = self.turn;
        let lines = self.check_board();

        for &player in [mover, !mover].iter() {
            if lines.iter().any(|&line| self.line_owner(line) == Some(player) && self.is_all_big(line)) {
                return Some(player);
            }
        }

        if self.rules.win_with_all_big_placed {
            for &player in [mover, !mover].iter() {
                if self.on_board(player, Some(Size::Big)) == self.rules.pieces_per_player as usize {
                    return Some(player);
                }
            }
        }

        None
    }

    /// Removes the pieces of `line` from the board and adds a big piece to the owner's pool for
    /// each of them.
    fn graduate_line(&mut self, line: ThreeInRow) {
        debug!("graduating {}", line);
        for &c in line.cells().iter() {
            if let Some(piece) = self.cell(c).piece() {
                self.board[c.index()] = Cell::Empty;
                self.pools[piece.owner as usize].put(Size::Big);
            }
        }
    }

    fn end_turn(&mut self) {
        self.turn = !self.turn;
        self.phase = Phase::Placing;
    }

    fn finish(&mut self, winner: Player) {
        info!("player {} wins", winner);
        self.phase = Phase::Finished(winner);
    }

    /// Parses a state written as `<board> <turn> <pool1> <pool2>`, checking piece counts against
    /// `rules`.
    ///
    /// The board lists the rows from 6 down to 1, separated by `/`. Each row gives its cells from
    /// `a` to `f` as piece letters (`S`, `B` for `Player1`; `s`, `b` for `Player2`), with runs of
    /// empty cells written as a digit. The turn is `1` or `2`, and each pool is
    /// `<small>-<big>`.
    ///
    /// A parsed state is finished if a player has already won. Otherwise, if the player to move
    /// has no piece to place, they must graduate one; if not, they must place a piece.
    pub fn from_notation(s: &str, rules: Rules) -> Result<GameState, ParseGameStateError> {
        use GameStateErrorKind::*;

        let err = ParseGameStateError::new;
        rules.validate().map_err(|_| err(InvalidRules))?;
        let mut state = GameState::starting(rules);
        let mut fields = s.split_whitespace();

        // parse the board
        let board = fields.next().ok_or_else(|| err(Empty))?;
        let rows: Vec<_> = board.split('/').collect();
        if rows.len() != Coordinate::SIZE {
            return Err(err(InvalidBoard));
        }
        for (i, row_str) in rows.iter().enumerate() {
            let row = Coordinate::SIZE - 1 - i;
            let mut column = 0;

            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(err(InvalidBoard));
                    }
                    column += run as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    let coordinate = Coordinate::new(row, column).ok_or_else(|| err(InvalidBoard))?;
                    state.board[coordinate.index()] = Cell::Piece(piece);
                    column += 1;
                } else {
                    return Err(err(InvalidBoard));
                }

                if column > Coordinate::SIZE {
                    return Err(err(InvalidBoard));
                }
            }
            if column != Coordinate::SIZE {
                return Err(err(InvalidBoard));
            }
        }

        // parse the turn and pools
        state.turn = fields.next().ok_or_else(|| err(MissingField))?
            .parse()
            .map_err(|_| err(InvalidTurn))?;
        for pool in state.pools.iter_mut() {
            *pool = fields.next().ok_or_else(|| err(MissingField))?.parse()?;
        }
        if fields.next().is_some() {
            return Err(err(ExtraField));
        }

        for &player in [Player::Player1, Player::Player2].iter() {
            let total = state.on_board(player, None) + state.pool(player).total();
            if total != rules.pieces_per_player as usize {
                return Err(err(PieceCountMismatch));
            }
        }

        if let Some(winner) = state.find_winner() {
            state.phase = Phase::Finished(winner);
        } else if state.pool(state.turn).is_empty() {
            state.phase = Phase::ChoosingGraduate;
        }

        Ok(state)
    }

    /// Writes the state in the notation read by `from_notation`. Pending choices are not written.
    pub fn to_notation(&self) -> String {
        let mut rows = Vec::with_capacity(Coordinate::SIZE);

        for row in (0..Coordinate::SIZE).rev() {
            let mut s = String::new();
            let mut count = 0;
            for column in 0..Coordinate::SIZE {
                match self.cell(Coordinate::new(row, column).expect("INFALLIBLE")).piece() {
                    Some(piece) => {
                        if count > 0 {
                            s += &count.to_string();
                            count = 0;
                        }
                        s.push(piece.to_char());
                    },
                    None => count += 1,
                }
            }
            if count > 0 {
                s += &count.to_string();
            }
            rows.push(s);
        }

        format!("{} {} {} {}", rows.join("/"), self.turn,
            self.pools[Player::Player1 as usize], self.pools[Player::Player2 as usize])
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting(Rules::default())
    }
}

impl fmt::Display for GameState {
    /// The state is formatted as follows:
    ///
    /// "{}" -- In the notation read by `from_notation` (eg 6/6/6/6/6/6 1 8-0 8-0)
    ///
    /// "{:#}" -- As a grid, with row numbers on the left and column letters underneath
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let mut s = String::new();
            for row in (0..Coordinate::SIZE).rev() {
                s += &(row + 1).to_string();
                for column in 0..Coordinate::SIZE {
                    s.push(' ');
                    match self.cell(Coordinate::new(row, column).expect("INFALLIBLE")).piece() {
                        Some(piece) => s.push(piece.to_char()),
                        None => s.push('.'),
                    }
                }
                s.push('\n');
            }
            s += "  a b c d e f";
            s.fmt(f)
        } else {
            self.to_notation().fmt(f)
        }
    }
}

impl FromStr for GameState {
    type Err = ParseGameStateError;

    /// Parses a state played with the default rules
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_notation(s, Rules::default())
    }
}
