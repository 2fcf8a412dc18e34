//! Error types for engine operations.

use crate::types::{GameStatus, Symbol};

/// A move the engine refused. No state changes when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a terminal status.
    #[display("Game is already over ({status})")]
    GameOver {
        /// The terminal status in effect.
        status: GameStatus,
    },

    /// Coordinate lies outside the grid.
    #[display("Coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// Cell already holds a marker.
    #[display("Cell ({x}, {y}) is already occupied by {by}")]
    CellOccupied {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Marker found in the cell.
        by: Symbol,
    },
}

impl std::error::Error for MoveError {}

/// A query that is meaningless in the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum QueryError {
    /// Winner requested before the game reached a terminal status.
    #[display("Game is still in progress; there is no winner yet")]
    GameInProgress,
}

impl std::error::Error for QueryError {}
