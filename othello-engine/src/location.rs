//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// Column letters, in column order.
pub(crate) const COLUMN_LABELS: &str = "ABCDEFGH";

/// Row digits, in row order.
const ROW_LABELS: &str = "12345678";

/// A location on the Othello board, addressed by (column, row).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration runs in row-major order from the upper-left cell.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`].
    /// Returns None unless exactly one bit is set.
    pub fn from_onehot(bitboard: Bitboard) -> Option<Self> {
        match bitboard.count_occupied() {
            1 => Some(Self(bitboard)),
            _ => None,
        }
    }

    /// Convert from a row-major cell index: 0 for (0, 0), 63 for (7, 7).
    /// Returns None for indices past the end of the board.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }

        Some(Self(Bitboard::from(1u64 << (NUM_SPACES - 1 - index))))
    }

    /// Convert into a row-major cell index.
    #[inline]
    pub fn to_index(self) -> usize {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as usize
    }

    /// Convert from column (`x`) and row (`y`) coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= EDGE_LENGTH || y >= EDGE_LENGTH {
            return None;
        }

        Self::from_index(y * EDGE_LENGTH + x)
    }

    /// Get the (column, row) coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index % EDGE_LENGTH, index / EDGE_LENGTH)
    }

    /// Get the one-hot bitboard for this location.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        self.0
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_coords();
        let column = COLUMN_LABELS.chars().nth(x).ok_or(fmt::Error)?;
        let row = ROW_LABELS.chars().nth(y).ok_or(fmt::Error)?;
        f.write_char(column)?;
        f.write_char(row)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string (expected a column A-H and a row 1-8)")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("D3", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let column = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let x = COLUMN_LABELS.find(column).ok_or(ParseLocationError)?;
        let y = ROW_LABELS
            .find(chars.next().ok_or(ParseLocationError)?)
            .ok_or(ParseLocationError)?;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(x, y).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc.0)
    }

    /// Returns whether this list holds no locations.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Collect the (column, row) coordinates of every location.
    pub fn to_coords(self) -> Vec<(usize, usize)> {
        self.map(Location::to_coords).collect()
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let highest = NUM_SPACES as u32 - 1 - bitboard.leading_zeros();
        let next_loc = Bitboard::from(1u64 << highest);
        self.0 ^= next_loc;

        Some(Location(next_loc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_occupied() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(
            Location::from_index(0),
            Some(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_index(63), Some(Location(Bitboard::from(1u64))));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_index(), 0);
        assert_eq!(Location(Bitboard::from(1u64)).to_index(), 63);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0), Location::from_index(0));
        assert_eq!(Location::from_coords(7, 0), Location::from_index(7));
        assert_eq!(Location::from_coords(0, 1), Location::from_index(8));
        assert_eq!(Location::from_coords(7, 7), Location::from_index(63));
        assert_eq!(Location::from_coords(8, 0), None);
        assert_eq!(Location::from_coords(0, 8), None);
    }

    #[test]
    fn location_to_coords() {
        for x in 0..EDGE_LENGTH {
            for y in 0..EDGE_LENGTH {
                let loc = Location::from_coords(x, y).unwrap();
                assert_eq!(loc.to_coords(), (x, y));
            }
        }
    }

    #[test]
    fn location_from_onehot() {
        assert!(Location::from_onehot(Bitboard::from(1u64 << 5)).is_some());
        assert_eq!(Location::from_onehot(Bitboard::from(0u64)), None);
        assert_eq!(Location::from_onehot(Bitboard::from(0b11u64)), None);
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::from_coords(0, 0).unwrap()));
        assert_eq!(Location::from_str("h8"), Ok(Location::from_coords(7, 7).unwrap()));
        assert_eq!(Location::from_str("D3"), Ok(Location::from_coords(3, 2).unwrap()));
        assert_eq!(Location::from_str(" c5\n"), Ok(Location::from_coords(2, 4).unwrap()));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::from_coords(0, 0).unwrap().to_string(), "A1");
        assert_eq!(Location::from_coords(7, 7).unwrap().to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("f6").unwrap().to_string(), "F6");
    }

    #[test]
    fn location_list_iterates_row_major() {
        let bits = Location::from_str("H1").unwrap().to_bitboard()
            | Location::from_str("A2").unwrap().to_bitboard()
            | Location::from_str("C8").unwrap().to_bitboard();
        let list = LocationList::from(bits);

        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "[H1, A2, C8]");
        assert_eq!(list.to_coords(), vec![(7, 0), (0, 1), (2, 7)]);
        assert!(list.contains(Location::from_str("A2").unwrap()));
        assert!(!list.contains(Location::from_str("A1").unwrap()));
    }

    #[test]
    fn empty_location_list() {
        let list = LocationList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }
}
