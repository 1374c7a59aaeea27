//! Text rendering of the board.

use itertools::Itertools;
use othello_engine::{Board, Location, LocationList, EDGE_LENGTH};

/// Marker for a cell where the player to move may play.
const HINT: char = '*';

/// Draw `board` as a grid labelled A-H across and 1-8 down.
/// Empty cells listed in `hints` are drawn with a marker.
pub fn render_board(board: Board, hints: LocationList) -> String {
    let header = format!("   {}", ('A'..='H').join(" "));

    let rows = (0..EDGE_LENGTH).map(|y| {
        let cells = (0..EDGE_LENGTH)
            .map(|x| match Location::from_coords(x, y) {
                Some(loc) if hints.contains(loc) => HINT,
                _ => board.cell(x, y).to_char(),
            })
            .join(" ");
        format!("{:>2} {}", y + 1, cells)
    });

    std::iter::once(header).chain(rows).join("\n")
}
