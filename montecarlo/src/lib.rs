//! Monte Carlo playout move policy.
//!
//! This crate chooses moves for two-player grid games by flat Monte Carlo
//! evaluation: from the current position it plays many complete games with
//! uniformly random moves, scores the squares of each finished game by who
//! won, and lets each playout vote for one square. The square with the
//! most votes is the chosen move.
//!
//! Each decision consists of four stages:
//!
//! 1. **Playout**: play a scratch clone of the board to completion with
//!    random moves
//! 2. **Scoring**: credit the winner's squares and debit the loser's
//! 3. **Voting**: pick the best-scored square that was empty on the
//!    original board
//! 4. **Aggregation**: tally votes across all playouts and select the
//!    most-voted square
//!
//! # Usage
//!
//! ```rust
//! use game_core::Player;
//! use games_tictactoe::TicTacToe;
//! use montecarlo::{decide_move, PolicyConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = TicTacToe::new(3);
//! let config = PolicyConfig::for_testing();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let decision = decide_move(&board, Player::X, &config, &mut rng);
//!
//! println!("Best move: {}", decision.best_move.unwrap());
//! ```
//!
//! # Configuration
//!
//! The [`PolicyConfig`] struct controls decision behavior:
//!
//! - `trials`: number of playouts per decision (default: 100)
//! - `score_current` / `score_other`: square weights applied when scoring
//!   a finished playout (both default: 1.0)
//! - `parallel`: run trials across a rayon worker pool; deterministic for
//!   a fixed caller RNG
//!
//! Randomness is always injected: every entry point takes `&mut impl Rng`,
//! and seeded [`rand_chacha::ChaCha20Rng`] streams make decisions
//! reproducible.

pub mod config;
pub mod decide;
pub mod grid;
pub mod playout;
pub mod score;
pub mod select;

// Re-export main types
pub use config::PolicyConfig;
pub use decide::{decide_move, Decision};
pub use grid::ScoreGrid;
pub use playout::playout;
pub use score::score_playout;
pub use select::select_move;
