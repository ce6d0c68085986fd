//! The game engine: history, pointer, and everything derived from them.

use super::action::{Move, PlayOutcome, Rejection};
use super::contracts::{Contract, PlayContract};
use super::error::HistoryError;
use super::history::History;
use super::position::Position;
use super::snapshot::Snapshot;
use super::status::GameStatus;
use super::types::{Board, Player};
use super::view::GameView;
use super::rules;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with time travel.
///
/// Owns every snapshot of the current branch and a pointer to the one on
/// display. `play` branches from the pointer, `jump_to` only moves it, and
/// `reset` starts over. One engine per game session; it holds no shared
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) pointer: usize,
}

impl GameEngine {
    /// Creates an engine showing the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            pointer: 0,
        }
    }

    /// Builds an engine by playing `cells` in order.
    ///
    /// Illegal entries are ignored exactly as [`play`](Self::play) ignores them.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut engine = Self::new();
        for cell in cells {
            engine.play(cell);
        }
        debug!(history_len = engine.history_len(), "Replayed moves");
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Actions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark on `cell` (0-8, row-major).
    ///
    /// Ignored without any state change when the cell is off the board, the
    /// displayed game is already won or drawn, or the square is taken.
    /// Otherwise every snapshot after the pointer is discarded, the new
    /// board is appended, and the pointer moves onto it.
    #[instrument(skip(self), fields(pointer = self.pointer, history_len = self.history.len()))]
    pub fn play(&mut self, cell: usize) -> PlayOutcome {
        match Position::from_index(cell) {
            Some(pos) => self.play_at(pos),
            None => {
                debug!(cell, "Ignoring play off the board");
                PlayOutcome::Ignored(Rejection::OutOfBounds(cell))
            }
        }
    }

    /// Same as [`play`](Self::play) with a typed position.
    #[instrument(skip(self), fields(pointer = self.pointer, player = %self.current_player()))]
    pub fn play_at(&mut self, pos: Position) -> PlayOutcome {
        if let Err(rejection) = PlayContract::pre(self, &pos) {
            debug!(%rejection, "Ignoring play");
            return PlayOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.current_player(), pos);
        let next = self.current_snapshot().successor(action);
        self.pointer = self.history.branch_from(self.pointer, next);

        #[cfg(debug_assertions)]
        {
            if let Err(violations) = PlayContract::post(&before, self) {
                tracing::error!(?violations, "Play postcondition failed");
                panic!("play postcondition violated: {:?}", violations);
            }
        }

        debug!(%action, pointer = self.pointer, "Move placed");
        PlayOutcome::Placed(action)
    }

    /// Moves the pointer to snapshot `index`. History is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index >= history_len()`.
    #[instrument(skip(self), fields(from = self.pointer, history_len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.get(index)?;
        self.pointer = index;
        debug!(status = %self.status(), "Jumped");
        Ok(())
    }

    /// Discards all moves; back to the empty board with X to move.
    #[instrument(skip(self), fields(history_len = self.history.len(), pointer = self.pointer))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.pointer = 0;
        info!("Game reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────────

    /// The snapshot under the pointer.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots()[self.pointer]
    }

    /// The board under the pointer.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// X on even pointers, O on odd ones.
    ///
    /// Still computed on a finished board; prefer [`status`](Self::status)
    /// for display.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.pointer)
    }

    /// Winner of the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// The line that won the displayed board, checked in [`rules::LINES`] order.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board()).map(|(_, line)| line)
    }

    /// Full board and no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Won or drawn; further plays are ignored.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.current_player())
    }

    /// Number of snapshots, including the empty starting board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// True when the pointer is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.pointer + 1 == self.history.len()
    }

    /// All snapshots of the current branch.
    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    /// The snapshot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `index >= history_len()`.
    pub fn snapshot(&self, index: usize) -> Result<&Snapshot, HistoryError> {
        self.history.get(index)
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Empty positions on the displayed board; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Read-only view for rendering.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
