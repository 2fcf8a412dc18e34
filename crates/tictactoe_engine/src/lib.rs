//! Tic-tac-toe engine - turn-based 3×3 grid game with a running score.
//!
//! The engine tracks an occupancy grid, alternates turns between X and O,
//! detects wins and ties, and tallies wins across games. It performs no I/O
//! and no rendering; a host translates its own input into grid coordinates
//! and displays the plain data the engine reports.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Symbol};
//!
//! let mut engine = GameEngine::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.attempt_move(x, y)?;
//!     engine.evaluate_status();
//! }
//! assert_eq!(engine.status(), GameStatus::WonBy(Symbol::X));
//! assert_eq!(engine.winner_text()?, "X");
//! assert_eq!(engine.scores().pair(), (1, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use error::{MoveError, QueryError};
pub use invariants::{EngineInvariants, Invariant, InvariantSet, InvariantViolation};
pub use types::{BOARD_SIZE, Cell, Coord, GameStatus, Grid, ScoreTally, Symbol};
