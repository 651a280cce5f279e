//! Console tic-tac-toe against the Monte Carlo move policy.
//!
//! Renders the board, reads human moves from stdin, and asks the policy
//! for the machine's replies. `--mode auto` lets the policy play both
//! sides.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Board, Coord, Outcome, Player};
use games_tictactoe::TicTacToe;
use montecarlo::{decide_move, PolicyConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

mod config;

use crate::config::{Args, Config, Mode};

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args);
    config.validate()?;
    init_tracing(&config.log_level);

    if config.trials == 0 {
        warn!("running with zero trials; the policy degenerates to random moves");
    }

    let policy = PolicyConfig::default()
        .with_trials(config.trials)
        .with_weights(config.score_current, config.score_other)
        .with_parallel(config.parallel);

    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    info!(
        dim = config.dim,
        trials = config.trials,
        mode = ?config.mode,
        "starting game"
    );

    match run_game(&config, &policy, &mut rng)? {
        Outcome::Win(player) => println!("{} wins!", player),
        Outcome::Draw => println!("It's a draw."),
    }
    Ok(())
}

fn run_game(config: &Config, policy: &PolicyConfig, rng: &mut ChaCha20Rng) -> Result<Outcome> {
    let mut board = TicTacToe::new(config.dim);
    let mut player = Player::X;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{}", board);

        let coord = if is_human(config.mode, player) {
            read_human_move(&board, player, &mut lines)?
        } else {
            let started = Instant::now();
            let decision = decide_move(&board, player, policy, rng);
            let coord = decision.best_move.context("no empty cells left to play")?;
            debug!(
                player = %player,
                chosen = %coord,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "policy move"
            );
            println!("{} plays {}", player, coord);
            coord
        };

        board.apply(coord, player)?;
        if let Some(outcome) = board.outcome() {
            println!();
            print!("{}", board);
            return Ok(outcome);
        }
        player = player.other();
    }
}

fn is_human(mode: Mode, player: Player) -> bool {
    match mode {
        Mode::HumanX => player == Player::X,
        Mode::HumanO => player == Player::O,
        Mode::Auto => false,
    }
}

fn read_human_move(
    board: &TicTacToe,
    player: Player,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Coord> {
    loop {
        print!("{} to move (row col): ", player);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("stdin closed before the game finished");
        };
        let line = line?;

        let Some(coord) = parse_coord(&line) else {
            println!("Enter a move as two numbers, e.g. `0 2`.");
            continue;
        };
        if coord.row >= board.dim() || coord.col >= board.dim() {
            println!("That square is off the board.");
            continue;
        }
        if board.cell(coord).is_some() {
            println!("That square is taken.");
            continue;
        }
        return Ok(coord);
    }
}

fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}
