//! The stateful game engine.
//!
//! Hosts drive a game with a two-step protocol: [`GameEngine::attempt_move`]
//! places a marker, then [`GameEngine::evaluate_status`] decides whether the
//! game ended. Status transitions and scoring happen only in the second step.

use crate::error::{MoveError, QueryError};
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::rules::{completed_line, is_full};
use crate::types::{Cell, Coord, GameStatus, Grid, ScoreTally, Symbol};
use tracing::{debug, info, instrument, warn};

/// Two-player tic-tac-toe engine with a running score.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    pub(crate) grid: Grid,
    pub(crate) turn: u32,
    pub(crate) status: GameStatus,
    pub(crate) scores: ScoreTally,
    pub(crate) history: Vec<Coord>,
}

impl GameEngine {
    /// Creates an engine with an empty grid and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the grid and turn counter for a fresh game. Scores are kept.
    #[instrument(skip(self), fields(scores = ?self.scores.pair()))]
    pub fn start_new_game(&mut self) {
        self.grid.clear();
        self.turn = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("New game started");
    }

    /// Symbol that the next accepted move will place.
    pub fn current_player(&self) -> Symbol {
        Symbol::for_turn(self.turn)
    }

    /// Symbol of the player who made the most recent move, if any.
    pub fn last_mover(&self) -> Option<Symbol> {
        self.turn.checked_sub(1).map(Symbol::for_turn)
    }

    /// Places the current player's marker at `(x, y)`.
    ///
    /// Does not evaluate the outcome; call [`evaluate_status`](Self::evaluate_status)
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving all state untouched, when the game is over,
    /// the coordinate lies outside the grid, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.current_player(), turn = self.turn))]
    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<(), MoveError> {
        if let Err(err) = self.validate_move(x, y) {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        let coord = Coord::new(x, y);
        let player = self.current_player();
        self.grid.set(coord, Cell::Occupied(player));
        self.history.push(coord);
        self.turn += 1;

        debug!(%coord, %player, "Move accepted");
        self.debug_check_invariants();
        Ok(())
    }

    fn validate_move(&self, x: usize, y: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }

        match self.grid.get(Coord::new(x, y)) {
            None => Err(MoveError::OutOfBounds { x, y }),
            Some(Cell::Occupied(by)) => Err(MoveError::CellOccupied { x, y, by }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Decides whether the last move ended the game.
    ///
    /// Only the player who just moved can have completed a line, so only
    /// their lines are scanned. A terminal status is returned as-is, which
    /// makes repeated calls safe: a win is scored exactly once.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn evaluate_status(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let Some(player) = self.last_mover() else {
            return self.status;
        };

        if let Some(line) = completed_line(&self.grid, player) {
            self.status = GameStatus::WonBy(player);
            self.scores.record_win(player);
            info!(%player, ?line, scores = ?self.scores.pair(), "Game won");
        } else if is_full(&self.grid) {
            self.status = GameStatus::Tied;
            info!(scores = ?self.scores.pair(), "Game tied");
        }

        self.debug_check_invariants();
        self.status
    }

    /// Attempts a move and evaluates the outcome in one call.
    ///
    /// # Errors
    ///
    /// Same as [`attempt_move`](Self::attempt_move); the status is not
    /// re-evaluated for a rejected move.
    #[instrument(skip(self))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<GameStatus, MoveError> {
        self.attempt_move(x, y)?;
        Ok(self.evaluate_status())
    }

    /// Name of the winning symbol, or `"Tie"`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::GameInProgress`] before the game has ended.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn winner_text(&self) -> Result<String, QueryError> {
        match self.status {
            GameStatus::InProgress => Err(QueryError::GameInProgress),
            GameStatus::Tied => Ok("Tie".to_string()),
            GameStatus::WonBy(symbol) => Ok(symbol.to_string()),
        }
    }

    /// Wins accumulated over the engine's lifetime.
    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    /// Last evaluated status. Does not scan the grid.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves accepted in the current game.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Coordinates accepted in the current game, in order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Runs every engine invariant.
    ///
    /// # Errors
    ///
    /// Returns all violated invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        EngineInvariants::check_all(self)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "Engine invariants violated: {:?}",
            self.check_invariants()
        );
    }
}
