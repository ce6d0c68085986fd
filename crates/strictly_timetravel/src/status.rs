//! Game status as shown on the status line.

use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of the displayed board.
///
/// `Display` renders the status line text: `"Next player: X"`,
/// `"Winner: O"`, or `"Draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Evaluates `board` with `next` as the player to move.
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(winner) = crate::rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if crate::rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// True for a won or drawn game.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}
