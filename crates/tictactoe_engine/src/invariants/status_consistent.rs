//! Status invariant: a terminal status is backed by the grid.

use super::Invariant;
use crate::rules::{completed_line, is_full};
use crate::{GameEngine, GameStatus};

/// Invariant: `WonBy(s)` implies a line of `s`; `Tied` implies a full grid.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.status() {
            GameStatus::InProgress => true,
            GameStatus::WonBy(symbol) => completed_line(engine.grid(), symbol).is_some(),
            GameStatus::Tied => is_full(engine.grid()),
        }
    }

    fn description() -> &'static str {
        "Terminal status matches the grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_win_is_backed_by_line() {
        let mut engine = GameEngine::new();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.play(x, y).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::WonBy(Symbol::X));
        assert!(StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_fabricated_win_violates() {
        let mut engine = GameEngine::new();
        engine.status = GameStatus::WonBy(Symbol::O);
        assert!(!StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_fabricated_tie_violates() {
        let mut engine = GameEngine::new();
        engine.status = GameStatus::Tied;
        assert!(!StatusConsistentInvariant::holds(&engine));
    }
}
