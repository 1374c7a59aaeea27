//! `othello-engine` implements the rules of two-player Othello for a local game.
//!
//! The crate is organized in two levels:
//!
//!  - [`bitboard`] contains the raw operations on packed one-bit-per-cell boards,
//!    including the eight-direction flip walk.
//!  - [`GameEngine`] owns a [`Board`] and the player to move, and is the only
//!    interface a presentation layer needs: query the board, attempt a move,
//!    detect the end of the game and report the result.

pub mod bitboard;
pub mod test_utils;

mod game;
mod location;
mod utils;

pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
