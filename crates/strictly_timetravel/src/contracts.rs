//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition turns a play into a no-op; a failed
//! postcondition is an engine bug.

use super::action::Rejection;
use super::engine::GameEngine;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::position::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the displayed board must not be won or full.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`Rejection::GameOver`] on a terminal board.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), Rejection> {
        if engine.is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`Rejection::SquareOccupied`] on a filled square.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine, pos: Position) -> Result<(), Rejection> {
        if engine.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Contract for [`GameEngine::play`].
///
/// Preconditions, in order:
/// - Game is not over
/// - Square is empty
///
/// Postconditions:
/// - History is the old prefix up to the pointer plus exactly one snapshot
/// - Pointer sits on the new snapshot
/// - All timeline invariants hold
pub struct PlayContract;

impl Contract<GameEngine, Position> for PlayContract {
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), Rejection> {
        GameNotOver::check(engine)?;
        SquareIsEmpty::check(engine, *pos)?;
        Ok(())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        let kept = before.pointer() + 1;

        if after.history_len() != kept + 1 {
            violations.push(InvariantViolation::new(format!(
                "History length {} after play from pointer {}",
                after.history_len(),
                before.pointer()
            )));
        }
        if after.pointer() + 1 != after.history_len() {
            violations.push(InvariantViolation::new("Pointer is not on the newest snapshot"));
        }
        if after.snapshots().get(..kept) != before.snapshots().get(..kept) {
            violations.push(InvariantViolation::new("Snapshots up to the pointer changed"));
        }
        if let Err(mut found) = TimelineInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let engine = GameEngine::new();
        assert!(PlayContract::pre(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let engine = GameEngine::replay([4]);
        assert_eq!(
            PlayContract::pre(&engine, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let engine = GameEngine::replay([0, 3, 1, 4, 2]);
        // Occupied and game over: the game-over rejection wins.
        assert_eq!(
            PlayContract::pre(&engine, &Position::TopLeft),
            Err(Rejection::GameOver)
        );
        assert_eq!(
            PlayContract::pre(&engine, &Position::BottomRight),
            Err(Rejection::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_branching_play() {
        let mut before = GameEngine::replay([0, 1, 2, 3]);
        before.jump_to(2).unwrap();
        let mut after = before.clone();
        assert!(after.play(4).is_placed());
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_prefix() {
        let before = GameEngine::replay([0, 1]);
        let mut after = before.clone();
        after.play(2);
        // Rewrite an earlier snapshot behind the engine's back.
        after.history.snapshots[1] = crate::Snapshot::initial();

        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_append() {
        let before = GameEngine::replay([0]);
        let after = before.clone();
        let violations = PlayContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
