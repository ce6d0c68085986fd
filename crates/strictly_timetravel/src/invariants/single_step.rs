//! Single-step invariant: each snapshot adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{GameEngine, Square};

/// Invariant: `history[i]` differs from `history[i - 1]` in exactly one cell.
///
/// That cell was empty before, now holds the mover's mark, and matches the
/// recorded move. Marks never change once placed within a branch.
pub struct SingleStepInvariant;

impl Invariant<GameEngine> for SingleStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let snapshots = engine.snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.move_index() != 0 || first.last_move().is_some() || first.board().occupied_count() != 0 {
            return false;
        }

        snapshots.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mov) = after.last_move() else {
                return false;
            };
            after.move_index() == i + 1
                && after.board().diff(before.board()) == [mov.position]
                && before.board().get(mov.position) == Square::Empty
                && after.board().get(mov.position) == Square::Occupied(mov.player)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous board"
    }
}
