//! Moves and the outcome of asking the engine to play one.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Every snapshot after the first records the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a play request was ignored.
///
/// None of these are failures of the engine: they are the clicks that
/// "do nothing" in the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The cell index is not on the board.
    #[display("Cell {} is not on the board (0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The displayed position already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// Result of [`GameEngine::play`](crate::GameEngine::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was placed and a new snapshot appended.
    Placed(Move),
    /// The request was a no-op; engine state is unchanged.
    Ignored(Rejection),
}

impl PlayOutcome {
    /// True when a new snapshot was appended.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}
