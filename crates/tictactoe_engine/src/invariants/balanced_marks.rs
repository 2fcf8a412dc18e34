//! Alternation invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameEngine, Symbol};
use tracing::warn;

/// Invariant: X count minus O count is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.grid().count(Symbol::X);
        let o_count = engine.grid().count(Symbol::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Marker balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for (x, y) in [(0, 0), (1, 1), (2, 0), (0, 2), (2, 2)] {
            engine.attempt_move(x, y).unwrap();
            assert!(BalancedMarksInvariant::holds(&engine));
        }
        assert_eq!(engine.current_player(), Symbol::O);
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut engine = GameEngine::new();
        engine.grid.set(Coord::new(1, 1), Cell::Occupied(Symbol::O));
        assert!(!BalancedMarksInvariant::holds(&engine));
    }
}
