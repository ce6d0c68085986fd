//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: the move producing `history[i]` belongs to X when `i` is odd.
///
/// X always opens, so move number `i` (1-based) is X's exactly when
/// `i - 1` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, snap)| snap.last_move().map(|m| m.player) == Some(Player::for_turn(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
