//! Pointer bounds invariant.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `0 <= pointer < history.len()`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameEngine> for PointerInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.pointer() < engine.history_len()
    }

    fn description() -> &'static str {
        "Pointer addresses a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_in_bounds_after_jump() {
        let mut engine = GameEngine::replay([0, 1, 2]);
        engine.jump_to(3).unwrap();
        assert!(PointerInBoundsInvariant::holds(&engine));
        engine.jump_to(0).unwrap();
        assert!(PointerInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut engine = GameEngine::replay([0, 1]);
        engine.pointer = 3;
        assert!(!PointerInBoundsInvariant::holds(&engine));
    }
}
