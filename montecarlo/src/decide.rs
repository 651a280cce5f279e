//! Trial aggregation and final move selection.
//!
//! Runs the configured number of independent playouts from one starting
//! position, lets each playout vote for a square, and picks the
//! most-voted square. Trials share nothing but the starting position, so
//! the parallel path hands each worker its own scratch state and merges
//! partial tallies at the end.

use game_core::{Board, Coord, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::grid::ScoreGrid;
use crate::playout::playout;
use crate::score::score_playout;
use crate::select::select_move;

/// Result of a Monte Carlo move decision.
#[derive(Debug, Clone)]
pub struct Decision {
    /// Chosen move, or `None` when the board had no empty cells.
    pub best_move: Option<Coord>,

    /// Vote counts per cell accumulated across all trials.
    pub tally: ScoreGrid,

    /// Number of playouts run.
    pub trials: u32,
}

/// Decide `player`'s next move on `board` by running `config.trials`
/// random playouts.
///
/// Each trial clones `board`, plays the clone to completion, scores the
/// finished position from `player`'s perspective, and casts one vote for
/// the best-scored cell among those empty on the *original* board. The
/// final move is the most-voted cell; all ties, per-trial and final,
/// break uniformly at random.
///
/// A board that is already terminal still runs its trials (each a
/// zero-length playout) and votes among the remaining empty cells. A
/// board with no empty cells short-circuits to the sentinel decision.
/// With `config.trials == 0` the all-zero tally degenerates to a
/// uniformly random empty cell; callers should treat that as a
/// misconfiguration.
pub fn decide_move<B, R>(
    board: &B,
    player: Player,
    config: &PolicyConfig,
    rng: &mut R,
) -> Decision
where
    B: Board + Sync,
    R: Rng,
{
    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return Decision {
            best_move: None,
            tally: ScoreGrid::zeros(board.dim()),
            trials: 0,
        };
    }

    if config.trials == 0 {
        debug!("zero trials configured; decision falls back to a random empty cell");
    }

    let tally = if config.parallel && config.trials > 0 {
        run_trials_parallel(board, player, config, &candidates, rng)
    } else {
        run_trials_serial(board, player, config, &candidates, rng)
    };

    let best_move = select_move(&tally, &candidates, rng);
    debug!(trials = config.trials, best = ?best_move, "decision complete");

    Decision {
        best_move,
        tally,
        trials: config.trials,
    }
}

/// One trial: playout on a scratch clone, score, vote into `tally`.
fn run_one_trial<B, R>(
    board: &B,
    player: Player,
    config: &PolicyConfig,
    candidates: &[Coord],
    tally: &mut ScoreGrid,
    rng: &mut R,
) where
    B: Board,
    R: Rng,
{
    let mut scratch = board.clone();
    playout(&mut scratch, player, rng);

    let scores = score_playout(&scratch, player, config);
    if let Some(vote) = select_move(&scores, candidates, rng) {
        tally.add(vote, 1.0);
    }
}

fn run_trials_serial<B, R>(
    board: &B,
    player: Player,
    config: &PolicyConfig,
    candidates: &[Coord],
    rng: &mut R,
) -> ScoreGrid
where
    B: Board,
    R: Rng,
{
    let mut tally = ScoreGrid::zeros(board.dim());
    for _ in 0..config.trials {
        run_one_trial(board, player, config, candidates, &mut tally, rng);
    }
    tally
}

fn run_trials_parallel<B, R>(
    board: &B,
    player: Player,
    config: &PolicyConfig,
    candidates: &[Coord],
    rng: &mut R,
) -> ScoreGrid
where
    B: Board + Sync,
    R: Rng,
{
    // Seeds are drawn from the caller's RNG up front, so a parallel
    // decision is a pure function of the caller's seed no matter how the
    // pool schedules the chunks.
    let shares = split_trials(config.trials, rayon::current_num_threads());
    let seeded: Vec<(u32, u64)> = shares.into_iter().map(|share| (share, rng.gen())).collect();

    seeded
        .into_par_iter()
        .map(|(share, seed)| {
            let mut worker_rng = ChaCha20Rng::seed_from_u64(seed);
            let mut partial = ScoreGrid::zeros(board.dim());
            for _ in 0..share {
                run_one_trial(board, player, config, candidates, &mut partial, &mut worker_rng);
            }
            partial
        })
        .reduce(
            || ScoreGrid::zeros(board.dim()),
            |mut acc, partial| {
                acc.merge(&partial);
                acc
            },
        )
}

/// Split `trials` into near-equal per-worker shares, never more shares
/// than trials.
fn split_trials(trials: u32, workers: usize) -> Vec<u32> {
    let workers = workers.max(1).min(trials.max(1) as usize) as u32;
    let base = trials / workers;
    let extra = trials % workers;
    (0..workers).map(|i| base + u32::from(i < extra)).collect()
}
