//! Low-level bitboard operations.
//!
//! These functions do not check that `active` and `opponent` are disjoint; callers
//! that break this contract get meaningless (but memory-safe) results.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board (column 0, row 0), and uses row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: (3, 3) and (4, 4).
pub const BLACK_START: Bitboard = Bitboard(0x0000001008000000);

/// Starting bitboard for White: (3, 4) and (4, 3).
pub const WHITE_START: Bitboard = Bitboard(0x0000000810000000);

/// A step on the board as a (column, row) offset.
pub type Direction = (i8, i8);

/// The eight neighbour offsets, excluding (0, 0).
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

// Masks selecting everything except the leftmost (column 0) and rightmost (column 7) columns.
const NOT_A_FILE: u64 = 0x7f7f7f7f7f7f7f7f;
const NOT_H_FILE: u64 = 0xfefefefefefefefe;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every bit set in `other` is also set here.
    #[inline]
    pub fn contains(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }

    /// Isolate the lowest set bit, or return an empty bitboard.
    #[inline]
    pub fn lowest_bit(self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_neg())
    }
}

/// Move every set bit one cell in `direction`, dropping bits that leave the board.
#[inline]
pub fn shift(bitboard: Bitboard, (dx, dy): Direction) -> Bitboard {
    // Moving one column right lowers the bit index by one; one row down lowers it by eight.
    let offset = i32::from(dx) + 8 * i32::from(dy);
    let shifted = if offset >= 0 {
        bitboard.0 >> offset
    } else {
        bitboard.0 << -offset
    };

    // Horizontal moves wrap into the neighbouring row: clip the column they land in.
    let mask = match dx {
        1 => NOT_A_FILE,
        -1 => NOT_H_FILE,
        _ => u64::MAX,
    };

    Bitboard(shifted & mask)
}

/// Compute the opponent pieces bracketed along one `direction` by a piece placed
/// at `move_mask`. Returns an empty bitboard if the walk leaves the board, hits an
/// empty cell, or reaches an active piece without passing any opponent piece.
#[inline]
pub fn flips_in_direction(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
    direction: Direction,
) -> Bitboard {
    let mut candidates = Bitboard::default();
    let mut cursor = shift(move_mask, direction);

    while !(cursor & opponent).is_empty() {
        candidates |= cursor;
        cursor = shift(cursor, direction);
    }

    if (cursor & active).is_empty() {
        Bitboard::default()
    } else {
        candidates
    }
}

/// Compute every opponent piece flipped when the active player places a piece at
/// the one-hot `move_mask`. An empty result means the move is illegal; this is
/// always the case when `move_mask` is already occupied.
pub fn compute_flips(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    if !((active | opponent) & move_mask).is_empty() {
        return Bitboard::default();
    }

    DIRECTIONS
        .iter()
        .fold(Bitboard::default(), |flips, &direction| {
            flips | flips_in_direction(active, opponent, move_mask, direction)
        })
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let mut empties = !(active | opponent);
    let mut moves = Bitboard::default();

    while !empties.is_empty() {
        let cell = empties.lowest_bit();
        empties ^= cell;

        if !compute_flips(active, opponent, cell).is_empty() {
            moves |= cell;
        }
    }

    moves
}

/// Compute updated bitboards for the active player and the opponent after the
/// active player places a piece at `move_mask`, flipping the pieces in `flips`.
/// `flips` must come from [`compute_flips`] for the same position and move.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
    flips: Bitboard,
) -> (Bitboard, Bitboard) {
    let new_active = active | flips | move_mask;
    let new_opponent = opponent ^ flips;

    (new_active, new_opponent)
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bit for (column, row), following the MSB-is-upper-left convention.
    fn cell(x: u32, y: u32) -> Bitboard {
        Bitboard(1 << (63 - (y * 8 + x)))
    }

    #[test]
    fn start_positions() {
        assert_eq!(BLACK_START, cell(3, 3) | cell(4, 4));
        assert_eq!(WHITE_START, cell(3, 4) | cell(4, 3));
        assert!((BLACK_START & WHITE_START).is_empty());
    }

    #[test]
    fn shift_moves_one_cell() {
        assert_eq!(shift(cell(3, 3), (1, 0)), cell(4, 3));
        assert_eq!(shift(cell(3, 3), (-1, 0)), cell(2, 3));
        assert_eq!(shift(cell(3, 3), (0, 1)), cell(3, 4));
        assert_eq!(shift(cell(3, 3), (0, -1)), cell(3, 2));
        assert_eq!(shift(cell(3, 3), (1, 1)), cell(4, 4));
        assert_eq!(shift(cell(3, 3), (-1, -1)), cell(2, 2));
        assert_eq!(shift(cell(3, 3), (1, -1)), cell(4, 2));
        assert_eq!(shift(cell(3, 3), (-1, 1)), cell(2, 4));
    }

    #[test]
    fn shift_drops_bits_leaving_the_board() {
        assert!(shift(cell(7, 2), (1, 0)).is_empty());
        assert!(shift(cell(0, 2), (-1, 0)).is_empty());
        assert!(shift(cell(2, 0), (0, -1)).is_empty());
        assert!(shift(cell(2, 7), (0, 1)).is_empty());
        assert!(shift(cell(7, 7), (1, 1)).is_empty());
        assert!(shift(cell(0, 0), (-1, -1)).is_empty());
        assert!(shift(cell(7, 3), (1, -1)).is_empty());
        assert!(shift(cell(0, 3), (-1, 1)).is_empty());
    }

    #[test]
    fn flips_in_one_direction() {
        let flips = flips_in_direction(BLACK_START, WHITE_START, cell(2, 4), (1, 0));
        assert_eq!(flips, cell(3, 4));

        let none = flips_in_direction(BLACK_START, WHITE_START, cell(2, 4), (-1, 0));
        assert!(none.is_empty());
    }

    #[test]
    fn adjacent_own_piece_flips_nothing() {
        // Black at (1, 0) directly next to the move: no opponent pieces in between.
        let active = cell(1, 0) | cell(3, 0);
        let opponent = cell(2, 0);
        assert!(flips_in_direction(active, opponent, cell(0, 0), (1, 0)).is_empty());
    }

    #[test]
    fn walk_off_the_board_flips_nothing() {
        let active = Bitboard::default();
        let opponent = cell(5, 0) | cell(6, 0) | cell(7, 0);
        assert!(compute_flips(active, opponent, cell(4, 0)).is_empty());
    }

    #[test]
    fn flips_accumulate_across_directions() {
        // Active pieces at the far ends of a row and a column through (0, 0).
        let active = cell(3, 0) | cell(0, 3);
        let opponent = cell(1, 0) | cell(2, 0) | cell(0, 1) | cell(0, 2);
        let flips = compute_flips(active, opponent, cell(0, 0));
        assert_eq!(flips, opponent);
    }

    #[test]
    fn occupied_move_has_no_flips() {
        assert!(compute_flips(BLACK_START, WHITE_START, cell(3, 3)).is_empty());
        assert!(compute_flips(BLACK_START, WHITE_START, cell(3, 4)).is_empty());
    }

    #[test]
    fn start_move_mask() {
        let moves = get_move_mask(BLACK_START, WHITE_START);
        assert_eq!(moves, cell(2, 4) | cell(3, 5) | cell(4, 2) | cell(5, 3));
        assert_eq!(moves.count_occupied(), 4);
    }

    #[test]
    fn apply_move_flips_and_places() {
        let mv = cell(2, 4);
        let flips = compute_flips(BLACK_START, WHITE_START, mv);
        let (black, white) = apply_move(BLACK_START, WHITE_START, mv, flips);
        assert_eq!(black, BLACK_START | cell(2, 4) | cell(3, 4));
        assert_eq!(white, cell(4, 3));
    }

    #[test]
    fn bits_iterate_row_major() {
        let bits: Vec<bool> = cell(1, 0).into_iter().collect();
        assert_eq!(bits.len(), NUM_SPACES);
        assert!(bits[1]);
        assert_eq!(bits.iter().filter(|&&b| b).count(), 1);
    }
}
