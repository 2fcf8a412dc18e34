//! Tic-tac-toe driver.
//!
//! Feeds already-resolved grid coordinates through the engine's two-step
//! protocol and prints the outcome and running score.

#![warn(missing_docs)]

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::MatchScript;
use serde::Serialize;
use tictactoe_engine::{Coord, GameEngine, GameStatus, ScoreTally};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Replay {
            moves,
            stop_on_illegal,
        } => run_replay(&moves, stop_on_illegal, cli.json),
        Command::Script { path } => run_script(&path, cli.json),
    }
}

/// A move the engine refused.
#[derive(Debug, Clone, Serialize)]
struct RejectedMove {
    coord: Coord,
    reason: String,
}

/// Outcome of one game as reported to the user.
#[derive(Debug, Clone, Serialize)]
struct GameReport {
    status: GameStatus,
    winner: Option<String>,
    moves: Vec<Coord>,
    rejected: Vec<RejectedMove>,
    scores: ScoreTally,
}

impl GameReport {
    fn summary(&self) -> String {
        let mut line = format!("{} ({} moves", self.status, self.moves.len());
        if !self.rejected.is_empty() {
            line.push_str(&format!(", {} rejected", self.rejected.len()));
        }
        line.push(')');
        line
    }
}

/// Final score across a match.
#[derive(Debug, Serialize)]
struct MatchReport {
    games: Vec<GameReport>,
    scores: ScoreTally,
}

fn score_line(scores: ScoreTally) -> String {
    format!("Score\n X: {}  O: {}", scores.wins_x(), scores.wins_o())
}

/// Plays one game on `engine`, which must be at the start of a game.
///
/// Rejected moves are skipped unless `stop_on_illegal` is set. Moves left
/// over after the game ends are rejected by the engine like any other.
#[instrument(skip(engine, moves), fields(moves = moves.len()))]
fn run_game(engine: &mut GameEngine, moves: &[Coord], stop_on_illegal: bool) -> Result<GameReport> {
    let mut rejected = Vec::new();

    for &coord in moves {
        match engine.attempt_move(coord.x, coord.y) {
            Ok(()) => {
                let status = engine.evaluate_status();
                debug!(%coord, ?status, "Move played");
            }
            Err(err) if stop_on_illegal => {
                return Err(err).with_context(|| format!("Move {} rejected", coord));
            }
            Err(err) => {
                warn!(%coord, error = %err, "Skipping rejected move");
                rejected.push(RejectedMove {
                    coord,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(GameReport {
        status: engine.status(),
        winner: engine.winner_text().ok(),
        moves: engine.history().to_vec(),
        rejected,
        scores: engine.scores(),
    })
}

/// Replays a single game given on the command line.
#[instrument(skip(moves))]
fn run_replay(moves: &[Coord], stop_on_illegal: bool, json: bool) -> Result<()> {
    let mut engine = GameEngine::new();
    let report = run_game(&mut engine, moves, stop_on_illegal)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.summary());
    if let Some(winner) = &report.winner {
        println!("Winner: {}", winner);
    }
    println!("{}", score_line(report.scores));
    Ok(())
}

/// Plays every game of a match script on one engine.
#[instrument(skip(path), fields(path = %path.display()))]
fn run_script(path: &std::path::Path, json: bool) -> Result<()> {
    let script = MatchScript::from_file(path)?;
    let mut engine = GameEngine::new();
    let mut games = Vec::with_capacity(script.games().len());

    for (index, game) in script.games().iter().enumerate() {
        engine.start_new_game();
        let report = run_game(&mut engine, game.moves(), *script.stop_on_illegal())
            .with_context(|| format!("Game {} aborted", index + 1))?;

        if report.status == GameStatus::InProgress {
            warn!(game = index + 1, "Game ended without a result");
        }
        if !json {
            println!("Game {}: {}", index + 1, report.summary());
        }
        games.push(report);
    }

    let scores = engine.scores();
    info!(scores = ?scores.pair(), games = games.len(), "Match finished");

    if json {
        let report = MatchReport { games, scores };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", score_line(scores));
    }
    Ok(())
}
