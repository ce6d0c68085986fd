//! Immutable board snapshots.

use super::action::Move;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// A board as it stood after `move_index` moves.
///
/// Snapshots are never mutated; playing a move builds a successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    move_index: usize,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty starting board (move 0).
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            move_index: 0,
            last_move: None,
        }
    }

    /// Builds the snapshot that follows this one after `mov`.
    ///
    /// Callers check occupancy first; the square is overwritten as given.
    pub(crate) fn successor(&self, mov: Move) -> Self {
        Self {
            board: self.board.with(mov.position, Square::Occupied(mov.player)),
            move_index: self.move_index + 1,
            last_move: Some(mov),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played to reach this board.
    pub fn move_index(&self) -> usize {
        self.move_index
    }

    /// The move that produced this snapshot, `None` for the initial board.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Player to move from this snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.move_index)
    }

    /// Navigation label for this snapshot.
    pub fn label(&self) -> String {
        match self.move_index {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{}", n),
        }
    }
}
