//! Miscellaneous project utilities.

use crate::location::COLUMN_LABELS;
use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Write 64 cell characters as a grid labelled with columns A-H and rows 1-8.
/// `cells` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    f.write_str("  ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{:>2}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
