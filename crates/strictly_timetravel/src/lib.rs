//! Strictly Timetravel - tic-tac-toe with a branching move history
//!
//! The engine owns every board snapshot of the current game and a pointer
//! into that history. Callers drive it with three actions:
//!
//! - **play**: place the current player's mark on a cell
//! - **jump_to**: move the pointer to any recorded snapshot
//! - **reset**: drop everything except the empty starting board
//!
//! Current player, winner and draw are derived from the snapshot under the
//! pointer, never stored.
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.play(cell);
//! }
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.status().to_string(), "Winner: X");
//!
//! // Travel back and branch off with a different move.
//! engine.jump_to(3).unwrap();
//! engine.play(5);
//! assert_eq!(engine.history_len(), 5);
//! assert!(matches!(engine.status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod history;
mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;
mod view;

pub use action::{Move, PlayOutcome, Rejection};
pub use contracts::{Contract, GameNotOver, PlayContract, SquareIsEmpty};
pub use engine::GameEngine;
pub use error::HistoryError;
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, PointerInBoundsInvariant,
    SingleStepInvariant, TerminalLockInvariant, TimelineInvariants,
};
pub use position::Position;
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{GameView, SnapshotEntry};
