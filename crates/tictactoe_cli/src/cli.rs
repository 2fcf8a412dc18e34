//! Command-line interface for the tictactoe driver.

use crate::config::parse_coord;
use clap::{Parser, Subcommand};
use tictactoe_engine::Coord;

/// Tic-tac-toe driver - replays moves through the engine and reports results
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Headless tic-tac-toe engine driver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game from moves given as `x,y`
    Replay {
        /// Moves in play order, X first (e.g. `0,0 1,1 2,2`)
        #[arg(required = true, value_parser = parse_coord)]
        moves: Vec<Coord>,

        /// Abort on the first rejected move instead of skipping it
        #[arg(long)]
        stop_on_illegal: bool,
    },

    /// Play every game in a TOML match script on one engine
    Script {
        /// Path to the match script
        #[arg(short, long, default_value = "match.toml")]
        path: std::path::PathBuf,
    },
}
