//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 3;

/// Player marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Moves on even turns (goes first).
    X,
    /// Moves on odd turns.
    O,
}

impl Symbol {
    /// Returns the symbol that moves on the given turn (even → X, odd → O).
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 { Symbol::X } else { Symbol::O }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// Grid coordinate: `x` is the column, `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate without validating it.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed-size square board, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Creates an all-empty grid.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.x)?.get(coord.y).copied()
    }

    /// True when the cell at `coord` holds a marker.
    ///
    /// Out-of-bounds coordinates report `false`.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Occupied(_)))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| cell != Cell::Empty)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.symbol() == Some(symbol))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// Iterates every cell in column-major order (x outer, y inner).
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, cell)| (Coord::new(x, y), *cell))
        })
    }

    /// Writes a cell. Callers validate `coord` first.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.x][coord.y] = cell;
    }

    /// Resets every cell to empty.
    pub(crate) fn clear(&mut self) {
        self.cells = Default::default();
    }
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line and at least one empty cell.
    #[default]
    InProgress,
    /// The symbol completed a line.
    WonBy(Symbol),
    /// Full board without a line.
    Tied,
}

impl GameStatus {
    /// True for `WonBy` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning symbol, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::WonBy(symbol) => Some(symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::WonBy(symbol) => write!(f, "{} wins!", symbol),
            GameStatus::Tied => write!(f, "Tie!"),
        }
    }
}

/// Wins per symbol, kept across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    wins_x: u32,
    wins_o: u32,
}

impl ScoreTally {
    /// Wins recorded for X.
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    /// Wins recorded for O.
    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    /// Wins recorded for `symbol`.
    pub fn wins(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.wins_x,
            Symbol::O => self.wins_o,
        }
    }

    /// Returns `(wins_x, wins_o)`.
    pub fn pair(&self) -> (u32, u32) {
        (self.wins_x, self.wins_o)
    }

    /// Records one win.
    pub(crate) fn record_win(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::X => self.wins_x += 1,
            Symbol::O => self.wins_o += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_for_turn_parity() {
        assert_eq!(Symbol::for_turn(0), Symbol::X);
        assert_eq!(Symbol::for_turn(1), Symbol::O);
        assert_eq!(Symbol::for_turn(8), Symbol::X);
    }

    #[test]
    fn test_grid_get_out_of_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Cell::Empty));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 3)), None);
        assert!(!grid.is_occupied(Coord::new(7, 7)));
    }

    #[test]
    fn test_grid_counts() {
        let mut grid = Grid::new();
        grid.set(Coord::new(0, 0), Cell::Occupied(Symbol::X));
        grid.set(Coord::new(2, 1), Cell::Occupied(Symbol::O));
        grid.set(Coord::new(1, 1), Cell::Occupied(Symbol::X));
        assert_eq!(grid.count(Symbol::X), 2);
        assert_eq!(grid.count(Symbol::O), 1);
        assert_eq!(grid.occupied(), 3);
        assert!(!grid.is_full());

        grid.clear();
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::WonBy(Symbol::O).to_string(), "O wins!");
        assert_eq!(GameStatus::Tied.to_string(), "Tie!");
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_tally_records_per_symbol() {
        let mut tally = ScoreTally::default();
        tally.record_win(Symbol::O);
        tally.record_win(Symbol::O);
        assert_eq!(tally.pair(), (0, 2));
        assert_eq!(tally.wins(Symbol::O), 2);
    }
}
