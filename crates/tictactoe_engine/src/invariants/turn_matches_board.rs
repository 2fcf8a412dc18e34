//! Turn counter invariant: every accepted move left exactly one marker.

use super::Invariant;
use crate::GameEngine;

/// Invariant: occupied cells, turn counter, and history length agree.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameEngine> for TurnMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let occupied = engine.grid().occupied();
        occupied == engine.turn() as usize && occupied == engine.history().len()
    }

    fn description() -> &'static str {
        "Occupied cells equal the turn counter and the history length"
    }
}
