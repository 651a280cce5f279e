//! Random playout simulation.

use game_core::{Board, Player};
use rand::Rng;
use tracing::trace;

/// Play `board` to completion with uniformly random moves.
///
/// `to_move` makes the first move; players alternate until the rules
/// engine reports a terminal outcome. A board that is already terminal is
/// left untouched (a zero-length playout). Callers own the mutation: pass
/// a scratch clone, never the canonical game board.
pub fn playout<B: Board, R: Rng>(board: &mut B, to_move: Player, rng: &mut R) {
    let mut player = to_move;
    let mut moves = 0u32;

    while board.outcome().is_none() {
        let empty = board.empty_cells();
        if empty.is_empty() {
            break;
        }
        let coord = empty[rng.gen_range(0..empty.len())];
        if board.apply(coord, player).is_err() {
            break;
        }
        player = player.other();
        moves += 1;
    }

    trace!(moves, "playout complete");
}
