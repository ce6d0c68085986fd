//! Terminal lock invariant: nothing is played after a win or draw.

use super::Invariant;
use crate::{GameEngine, rules};

/// Invariant: no snapshot follows a won or full board.
pub struct TerminalLockInvariant;

impl Invariant<GameEngine> for TerminalLockInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .snapshots()
            .windows(2)
            .all(|pair| !rules::is_terminal(pair[0].board()))
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}
