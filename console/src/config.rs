//! Driver configuration.
//!
//! Settings are resolved with the following priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`TTT_<KEY>`)
//! 3. config.toml file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::warn;

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &["config.toml", "../config.toml"];

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "tictactoe",
    about = "Play N-by-N tic-tac-toe against a Monte Carlo move policy"
)]
pub struct Args {
    /// Board side length
    #[arg(long)]
    pub dim: Option<usize>,

    /// Playouts per policy decision
    #[arg(long)]
    pub trials: Option<u32>,

    /// RNG seed for reproducible games; omit for a fresh seed per run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who plays which side
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Run trials on a rayon worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Explicit config file path (otherwise config.toml is searched for)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level filter (e.g. info, debug, montecarlo=trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Side assignment for the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Human plays X, the policy plays O
    HumanX,
    /// Human plays O, the policy plays X
    HumanO,
    /// The policy plays both sides
    Auto,
}

fn d_dim() -> usize {
    3
}
fn d_trials() -> u32 {
    100
}
fn d_weight() -> f64 {
    1.0
}
fn d_log_level() -> String {
    "info".into()
}

/// Settings accepted from config.toml.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FileConfig {
    #[serde(default = "d_dim")]
    pub dim: usize,
    #[serde(default = "d_trials")]
    pub trials: u32,
    #[serde(default = "d_weight")]
    pub score_current: f64,
    #[serde(default = "d_weight")]
    pub score_other: f64,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dim: d_dim(),
            trials: d_trials(),
            score_current: d_weight(),
            score_other: d_weight(),
            parallel: false,
            log_level: d_log_level(),
        }
    }
}

/// Fully resolved driver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub dim: usize,
    pub trials: u32,
    pub score_current: f64,
    pub score_other: f64,
    pub parallel: bool,
    pub seed: Option<u64>,
    pub mode: Mode,
    pub log_level: String,
}

impl Config {
    /// Resolve the configuration from defaults, config file, environment,
    /// and command-line flags.
    pub fn load(args: &Args) -> Config {
        let mut file = match &args.config {
            Some(path) => load_from_path(path),
            None => CONFIG_SEARCH_PATHS
                .iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
                .map(|path| load_from_path(&path))
                .unwrap_or_default(),
        };
        apply_env_overrides(&mut file);

        Config {
            dim: args.dim.unwrap_or(file.dim),
            trials: args.trials.unwrap_or(file.trials),
            score_current: file.score_current,
            score_other: file.score_other,
            parallel: args.parallel || file.parallel,
            seed: args.seed,
            mode: args.mode.unwrap_or(Mode::HumanX),
            log_level: args.log_level.clone().unwrap_or(file.log_level),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            bail!("board dimension must be at least 1");
        }
        Ok(())
    }
}

/// Load settings from a specific path, falling back to defaults on error.
fn load_from_path(path: &Path) -> FileConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                FileConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            FileConfig::default()
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($field:expr, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $field = v;
        }
    };
    // Parseable field (usize, u32, f64, bool)
    ($field:expr, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $field = v;
        }
    };
}

/// Apply `TTT_<KEY>` environment variable overrides.
fn apply_env_overrides(config: &mut FileConfig) {
    env_override!(config.dim, "TTT_DIM", parse);
    env_override!(config.trials, "TTT_TRIALS", parse);
    env_override!(config.score_current, "TTT_SCORE_CURRENT", parse);
    env_override!(config.score_other, "TTT_SCORE_OTHER", parse);
    env_override!(config.parallel, "TTT_PARALLEL", parse);
    env_override!(config.log_level, "TTT_LOG_LEVEL");
}
