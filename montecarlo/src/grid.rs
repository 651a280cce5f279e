//! Value-semantic score grids.

use game_core::Coord;

/// An N-by-N grid of per-square scores.
///
/// Grids are owned values returned from each scoring stage. A per-trial
/// grid and the decision tally never alias each other, which is what
/// allows trials to run on independent workers and merge at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    dim: usize,
    scores: Vec<f64>,
}

impl ScoreGrid {
    /// An all-zero grid with the given side length.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            scores: vec![0.0; dim * dim],
        }
    }

    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Score at `coord`.
    pub fn get(&self, coord: Coord) -> f64 {
        self.scores[self.index(coord)]
    }

    /// Add `delta` to the score at `coord`.
    pub fn add(&mut self, coord: Coord, delta: f64) {
        let idx = self.index(coord);
        self.scores[idx] += delta;
    }

    /// Cell-wise sum of another grid into this one.
    ///
    /// # Panics
    ///
    /// Panics if the grids have different dimensions.
    pub fn merge(&mut self, other: &ScoreGrid) {
        assert_eq!(
            self.dim, other.dim,
            "cannot merge grids of different dimensions"
        );
        for (slot, value) in self.scores.iter_mut().zip(&other.scores) {
            *slot += value;
        }
    }

    /// Iterate over all cells as `(coord, score)` pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        let dim = self.dim;
        self.scores
            .iter()
            .enumerate()
            .map(move |(idx, &score)| (Coord::new(idx / dim, idx % dim), score))
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.row < self.dim && coord.col < self.dim,
            "coordinate {} is outside a {}x{} grid",
            coord,
            self.dim,
            self.dim
        );
        coord.row * self.dim + coord.col
    }
}
