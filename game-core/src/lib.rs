//! Core traits and types for two-player grid games
//!
//! This crate provides the contract between a rules engine and the
//! decision policies that consume it:
//! - `Player`: the two mark owners and the switch involution
//! - `Board`: query and mutation interface a rules engine implements
//! - `Outcome`: terminal result reported by a rules engine
//! - `MoveError`: typed errors for invalid move application

pub mod board;
pub mod error;
pub mod player;

// Re-export main types for convenience
pub use board::{Board, Coord, Outcome};
pub use error::MoveError;
pub use player::Player;
