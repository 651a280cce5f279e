//! Per-square scoring of completed playouts.

use game_core::{Board, Coord, Outcome, Player};

use crate::config::PolicyConfig;
use crate::grid::ScoreGrid;

/// Score every occupied square of a completed playout from
/// `perspective`'s point of view.
///
/// Returns a fresh grid: the winner's squares gain `score_current`, the
/// loser's squares lose `score_other`, and a drawn playout contributes
/// nothing. Empty squares are never scored. A non-terminal board also
/// scores as all-zero; callers are expected to pass a played-out board.
pub fn score_playout<B: Board>(
    board: &B,
    perspective: Player,
    config: &PolicyConfig,
) -> ScoreGrid {
    let mut grid = ScoreGrid::zeros(board.dim());

    let (for_perspective, for_opponent) = match board.outcome() {
        Some(Outcome::Win(winner)) if winner == perspective => {
            (config.score_current, -config.score_other)
        }
        Some(Outcome::Win(_)) => (-config.score_other, config.score_current),
        Some(Outcome::Draw) | None => return grid,
    };

    for row in 0..board.dim() {
        for col in 0..board.dim() {
            let coord = Coord::new(row, col);
            match board.cell(coord) {
                Some(mark) if mark == perspective => grid.add(coord, for_perspective),
                Some(_) => grid.add(coord, for_opponent),
                None => {}
            }
        }
    }

    grid
}
