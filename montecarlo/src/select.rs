//! Move selection over a score grid.

use game_core::Coord;
use rand::Rng;

use crate::grid::ScoreGrid;

/// Pick the highest-scoring candidate cell, breaking ties uniformly at
/// random. Returns `None` when there are no candidates.
///
/// Used twice per decision at different granularities: once per playout
/// to cast a vote (candidates are the cells empty on the original board)
/// and once at the end over the vote tally. Scores are sums of identical
/// weight constants, so exact equality identifies ties.
pub fn select_move<R: Rng>(
    grid: &ScoreGrid,
    candidates: &[Coord],
    rng: &mut R,
) -> Option<Coord> {
    let first = *candidates.first()?;

    let mut max = grid.get(first);
    for &coord in &candidates[1..] {
        let score = grid.get(coord);
        if score > max {
            max = score;
        }
    }

    let best: Vec<Coord> = candidates
        .iter()
        .copied()
        .filter(|&coord| grid.get(coord) == max)
        .collect();

    Some(best[rng.gen_range(0..best.len())])
}
