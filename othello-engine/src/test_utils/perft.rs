//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation and flipping over the whole game tree.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::GameEngine;

/// Count the positions `depth` moves below the starting position.
/// A terminal position counts as a leaf wherever it occurs.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(GameEngine::new(), depth)
}

fn leaves_below(engine: GameEngine, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = engine.legal_moves(engine.current_player());
    if moves.is_empty() {
        // The player to move is stuck: the game is over
        return 1;
    }

    moves
        .map(|loc| {
            let mut child = engine;
            let (x, y) = loc.to_coords();
            child.attempt_move(x, y);
            leaves_below(child, depth - 1)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
