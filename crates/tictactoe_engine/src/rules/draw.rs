//! Draw detection logic.

use super::win::check_winner;
use crate::types::Grid;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// A full grid with no completed line.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
