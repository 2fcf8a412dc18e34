//! Win detection logic.

use crate::types::{BOARD_SIZE, Cell, Coord, Grid, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A row, column, or diagonal.
pub type Line = [Coord; BOARD_SIZE];

/// All lines in evaluation order.
///
/// Columns (fixed x) in x order, then rows (fixed y) in y order, then the
/// down-right diagonal and finally the up-right diagonal. When several lines
/// complete at once, the first in this order is reported.
pub fn lines() -> impl Iterator<Item = Line> {
    let columns = (0..BOARD_SIZE).map(|x| -> Line { std::array::from_fn(|y| Coord::new(x, y)) });
    let rows = (0..BOARD_SIZE).map(|y| -> Line { std::array::from_fn(|x| Coord::new(x, y)) });
    let down_right: Line = std::array::from_fn(|i| Coord::new(i, i));
    let up_right: Line = std::array::from_fn(|i| Coord::new(i, BOARD_SIZE - 1 - i));

    columns
        .chain(rows)
        .chain(std::iter::once(down_right))
        .chain(std::iter::once(up_right))
}

/// Returns the first complete line of `symbol`, if any.
#[instrument(skip(grid))]
pub fn completed_line(grid: &Grid, symbol: Symbol) -> Option<Line> {
    lines().find(|line| {
        line.iter()
            .all(|&coord| grid.get(coord) == Some(Cell::Occupied(symbol)))
    })
}

/// Checks whether either symbol owns a complete line.
///
/// X is checked first. Legal play never produces lines for both symbols.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Symbol> {
    Symbol::iter().find(|&symbol| completed_line(grid, symbol).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(marks: &[(usize, usize, Symbol)]) -> Grid {
        let mut grid = Grid::new();
        for &(x, y, symbol) in marks {
            grid.set(Coord::new(x, y), Cell::Occupied(symbol));
        }
        grid
    }

    #[test]
    fn test_line_count_and_order() {
        let all: Vec<Line> = lines().collect();
        assert_eq!(all.len(), 2 * BOARD_SIZE + 2);
        // First column, then first row.
        assert_eq!(all[0], [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(all[3], [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]);
        assert_eq!(all[6], [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
        assert_eq!(all[7], [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_column_win() {
        let grid = grid_with(&[(1, 0, Symbol::O), (1, 1, Symbol::O), (1, 2, Symbol::O)]);
        assert_eq!(check_winner(&grid), Some(Symbol::O));
        assert_eq!(completed_line(&grid, Symbol::X), None);
    }

    #[test]
    fn test_up_right_diagonal() {
        let grid = grid_with(&[(0, 2, Symbol::X), (1, 1, Symbol::X), (2, 0, Symbol::X)]);
        assert_eq!(
            completed_line(&grid, Symbol::X),
            Some([Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)])
        );
    }

    #[test]
    fn test_column_reported_before_row() {
        // X owns column 0 and row 0 simultaneously.
        let grid = grid_with(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::X),
            (0, 2, Symbol::X),
            (1, 0, Symbol::X),
            (2, 0, Symbol::X),
        ]);
        assert_eq!(
            completed_line(&grid, Symbol::X),
            Some([Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = grid_with(&[(0, 0, Symbol::X), (1, 1, Symbol::X), (2, 2, Symbol::O)]);
        assert_eq!(check_winner(&grid), None);
    }
}
