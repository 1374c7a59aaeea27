//! Implements game-level Othello logic.
//!
//! [`GameEngine`] is the safe, complete interface: it owns the [`Board`] and the
//! player to move, and every change to either goes through [`GameEngine::try_move`].
//! For raw access to the flip algorithm, see [`crate::bitboard`].

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::{utils, Location, LocationList, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, trace};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string (expected black or white)")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Player::Black),
            "white" | "w" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// The character used for this cell in board diagrams.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }
}

/// An 8x8 board, stored as one bitboard per color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// The starting position: Black on (3, 3) and (4, 4), White on (3, 4) and (4, 3).
    pub const fn starting() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            black: Bitboard::default(),
            white: Bitboard::default(),
        }
    }

    /// Get the pieces belonging to `player`.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask of every occupied cell.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.black | self.white
    }

    /// Get the pieces as (`player`'s, opponent's).
    #[inline]
    fn sides(self, player: Player) -> (Bitboard, Bitboard) {
        (self.pieces(player), self.pieces(!player))
    }

    /// Get the contents of a cell.
    pub fn cell_at(self, loc: Location) -> Cell {
        let mask = loc.to_bitboard();
        if self.black.contains(mask) {
            Cell::Black
        } else if self.white.contains(mask) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Get the contents of the cell at column `x`, row `y`.
    /// Off-board coordinates read as empty.
    pub fn cell(self, x: usize, y: usize) -> Cell {
        Location::from_coords(x, y).map_or(Cell::Empty, |loc| self.cell_at(loc))
    }

    /// Get every cell as a grid indexed `[x][y]`.
    pub fn cells(self) -> [[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for (x, column) in cells.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                *cell = self.cell(x, y);
            }
        }
        cells
    }

    /// Count the pieces belonging to `player`.
    #[inline]
    pub fn count(self, player: Player) -> u8 {
        self.pieces(player).count_occupied()
    }

    /// Count the empty cells.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.occupied().count_empty()
    }

    /// Put a piece for `player` at `loc` and flip `flips` over to `player`.
    fn with_move(self, player: Player, loc: Location, flips: LocationList) -> Self {
        let (active, opponent) = self.sides(player);
        let (active, opponent) =
            bitboard::apply_move(active, opponent, loc.to_bitboard(), flips.into());

        match player {
            Player::Black => Self {
                black: active,
                white: opponent,
            },
            Player::White => Self {
                black: opponent,
                white: active,
            },
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = (0..NUM_SPACES)
            .filter_map(Location::from_index)
            .map(|loc| self.cell_at(loc).to_char());
        utils::format_grid(cells, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board diagram", found)]
    InvalidCell { found: char },
    #[display(fmt = "board diagram has {} cells, expected 64", cells)]
    WrongLength { cells: usize },
}

/// Build a [`Board`] from a 64-cell diagram in row-major order.
/// `X` or `#` is Black, `O` is White, `-` or `.` is empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut cells = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match symbol {
                'X' | 'x' | '#' => Cell::Black,
                'O' | 'o' => Cell::White,
                '-' | '.' => Cell::Empty,
                found => return Err(ParseBoardError::InvalidCell { found }),
            };

            if let Some(loc) = Location::from_index(cells) {
                match cell {
                    Cell::Black => board.black |= loc.to_bitboard(),
                    Cell::White => board.white |= loc.to_bitboard(),
                    Cell::Empty => {}
                }
            }
            cells += 1;
        }

        if cells != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { cells });
        }

        Ok(board)
    }
}

/// Why a move was rejected. The board is never changed by a rejected move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "({}, {}) is off the board", x, y)]
    OutOfBounds { x: usize, y: usize },
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },
    #[display(fmt = "{} would not flip any pieces", location)]
    NoFlips { location: Location },
}

/// Piece counts for both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// The player with more pieces, or None on a tie.
    pub fn winner(self) -> Option<Player> {
        use std::cmp::Ordering;

        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }

    /// Total pieces on the board.
    pub fn total(self) -> u8 {
        self.black + self.white
    }
}

/// Whether the game can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Terminal,
}

/// The complete state of an Othello game: the board and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Start a game from the starting position, with Black to move.
    pub fn new() -> Self {
        Self::with_position(Board::starting(), Player::default())
    }

    /// Start a game from an arbitrary position.
    /// Positions not reachable from the start are accepted as given.
    pub fn with_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Get a copy of the current board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Get the player to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get a status line naming the player to move.
    pub fn current_player_label(&self) -> &'static str {
        match self.current_player {
            Player::Black => "Black to move",
            Player::White => "White to move",
        }
    }

    /// Compute the cells `player` would flip by placing a piece at column `x`, row `y`.
    /// Empty if the cell is off the board or occupied, or if the move is illegal.
    pub fn compute_flips(&self, x: usize, y: usize, player: Player) -> LocationList {
        Location::from_coords(x, y)
            .map(|loc| self.flips_at(loc, player))
            .unwrap_or_default()
    }

    fn flips_at(&self, loc: Location, player: Player) -> LocationList {
        let (active, opponent) = self.board.sides(player);
        bitboard::compute_flips(active, opponent, loc.to_bitboard()).into()
    }

    /// Place a piece for the player to move at column `x`, row `y`.
    /// Returns whether the move was legal; illegal moves change nothing.
    pub fn attempt_move(&mut self, x: usize, y: usize) -> bool {
        self.try_move(x, y).is_ok()
    }

    /// Place a piece for the player to move at column `x`, row `y`, returning
    /// the flipped cells or the reason the move was rejected.
    pub fn try_move(&mut self, x: usize, y: usize) -> Result<LocationList, MoveError> {
        let result = match Location::from_coords(x, y) {
            Some(loc) => self.place(loc),
            None => Err(MoveError::OutOfBounds { x, y }),
        };

        if let Err(err) = result {
            trace!(player = %self.current_player, %err, "move rejected");
        }

        result
    }

    /// Same as [`GameEngine::try_move`], for a parsed [`Location`].
    pub fn play(&mut self, loc: Location) -> Result<LocationList, MoveError> {
        let (x, y) = loc.to_coords();
        self.try_move(x, y)
    }

    fn place(&mut self, loc: Location) -> Result<LocationList, MoveError> {
        if self.board.cell_at(loc) != Cell::Empty {
            return Err(MoveError::Occupied { location: loc });
        }

        let mover = self.current_player;
        let flips = self.flips_at(loc, mover);
        if flips.is_empty() {
            return Err(MoveError::NoFlips { location: loc });
        }

        self.board = self.board.with_move(mover, loc, flips);
        self.current_player = !mover;

        debug!(player = %mover, location = %loc, flipped = flips.len(), "move applied");
        Ok(flips)
    }

    /// Get every cell where `player` has a legal move.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        let (active, opponent) = self.board.sides(player);
        bitboard::get_move_mask(active, opponent).into()
    }

    /// Returns whether `player` has at least one legal move.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        LocationList::from(!self.board.occupied()).any(|loc| !self.flips_at(loc, player).is_empty())
    }

    /// Returns whether the player to move has no legal move.
    /// The opponent's moves are not considered: there is no passing.
    pub fn is_terminal(&self) -> bool {
        !self.has_any_legal_move(self.current_player)
    }

    /// Get the state-machine status of the game.
    pub fn status(&self) -> GameStatus {
        if self.is_terminal() {
            GameStatus::Terminal
        } else {
            GameStatus::InProgress
        }
    }

    /// Count the pieces of each color.
    pub fn score(&self) -> Score {
        Score {
            black: self.board.count(Player::Black),
            white: self.board.count(Player::White),
        }
    }

    /// Describe the result: the winner (or a draw) and both piece counts.
    pub fn result_summary(&self) -> String {
        let Score { black, white } = self.score();

        match self.score().winner() {
            Some(Player::Black) => format!("Black wins!\nBlack: {}, White: {}", black, white),
            Some(Player::White) => format!("White wins!\nWhite: {}, Black: {}", white, black),
            None => format!("Draw!\nBoth players have {} pieces", black),
        }
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        f.write_str(self.current_player_label())
    }
}
