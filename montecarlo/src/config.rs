//! Policy configuration parameters.

/// Configuration for a Monte Carlo move decision.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Number of independent playouts to run per decision.
    ///
    /// Zero is defined but discouraged: the tally stays all-zero and the
    /// decision degenerates to a uniformly random empty cell.
    pub trials: u32,

    /// Weight added to each of the winner's squares when scoring a
    /// finished playout.
    pub score_current: f64,

    /// Weight subtracted from each of the loser's squares when scoring a
    /// finished playout. Need not equal `score_current`; asymmetric
    /// weighting is a tuning knob.
    pub score_other: f64,

    /// Run trials across a rayon worker pool instead of serially.
    /// The decision stays deterministic for a fixed caller RNG.
    pub parallel: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            score_current: 1.0,
            score_other: 1.0,
            parallel: false,
        }
    }
}

impl PolicyConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            trials: 25,
            ..Self::default()
        }
    }

    /// Builder pattern: set the number of playouts per decision.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Builder pattern: set the winner/loser square weights.
    pub fn with_weights(mut self, score_current: f64, score_other: f64) -> Self {
        self.score_current = score_current;
        self.score_other = score_other;
        self
    }

    /// Builder pattern: enable or disable parallel trials.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
