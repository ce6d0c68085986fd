//! Serializable read-only view of an engine for rendering.

use super::action::Move;
use super::engine::GameEngine;
use super::position::Position;
use super::status::GameStatus;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Everything an interface needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Nine cells in row-major order: `""`, `"X"` or `"O"`.
    pub cells: Vec<String>,
    /// Status line text, e.g. `"Next player: X"`.
    pub status: String,
    /// Player to move, `None` once the game is over.
    pub next_player: Option<Player>,
    /// Winner of the displayed board.
    pub winner: Option<Player>,
    /// The winning three cells.
    pub winning_line: Option<[Position; 3]>,
    /// Full board without a winner.
    pub is_draw: bool,
    /// Index of the displayed snapshot.
    pub pointer: usize,
    /// One entry per snapshot, for jump controls.
    pub history: Vec<SnapshotEntry>,
}

/// A jump target in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Snapshot index to pass to `jump_to`.
    pub index: usize,
    /// Button label, e.g. `"Go to move #3"`.
    pub label: String,
    /// Move that produced the snapshot.
    pub last_move: Option<Move>,
    /// Whether this snapshot is on display.
    pub current: bool,
}

impl GameView {
    /// Number of jump targets.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl From<&GameEngine> for GameView {
    fn from(engine: &GameEngine) -> Self {
        let status = engine.status();
        Self {
            cells: engine
                .current_board()
                .squares()
                .iter()
                .map(|s| s.symbol().to_string())
                .collect(),
            status: status.to_string(),
            next_player: match status {
                GameStatus::InProgress { next } => Some(next),
                _ => None,
            },
            winner: status.winner(),
            winning_line: engine.winning_line(),
            is_draw: status == GameStatus::Draw,
            pointer: engine.pointer(),
            history: engine
                .snapshots()
                .iter()
                .enumerate()
                .map(|(index, snap)| SnapshotEntry {
                    index,
                    label: snap.label(),
                    last_move: snap.last_move(),
                    current: index == engine.pointer(),
                })
                .collect(),
        }
    }
}
