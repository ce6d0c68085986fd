//! Append-only snapshot log with truncation.

use super::error::HistoryError;
use super::snapshot::Snapshot;
use tracing::{debug, instrument};

/// Ordered snapshots of one game branch.
///
/// Always holds at least the initial snapshot, and `snapshots[i]` is the
/// board after `i` moves. Branching is a truncate followed by a push, so
/// abandoned futures are dropped rather than kept as a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in move order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot at `index`.
    pub fn get(&self, index: usize) -> Result<&Snapshot, HistoryError> {
        self.snapshots.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.snapshots.len(),
        })
    }

    /// Drops every snapshot after `index`, then appends `next`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, next), fields(len = self.snapshots.len()))]
    pub(crate) fn branch_from(&mut self, index: usize, next: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(index + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating abandoned future");
        }
        self.snapshots.truncate(index + 1);
        self.snapshots.push(next);
        self.snapshots.len() - 1
    }

    /// Back to the single empty snapshot.
    pub(crate) fn clear(&mut self) {
        self.snapshots.truncate(1);
        if let Some(first) = self.snapshots.first_mut() {
            *first = Snapshot::initial();
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    fn grow(history: &mut History, positions: &[Position]) {
        for &pos in positions {
            let tip = history.len() - 1;
            let next = history.snapshots[tip].successor(Move::new(Player::for_turn(tip), pos));
            history.branch_from(tip, next);
        }
    }

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0).map(|s| s.move_index()), Ok(0));
    }

    #[test]
    fn test_get_out_of_range() {
        let history = History::new();
        assert_eq!(
            history.get(1),
            Err(HistoryError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_branch_from_middle_truncates() {
        let mut history = History::new();
        grow(
            &mut history,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(history.len(), 4);

        let next = history.snapshots[1].successor(Move::new(Player::O, Position::Center));
        let tip = history.branch_from(1, next);

        assert_eq!(tip, 2);
        assert_eq!(history.len(), 3);
        assert!(history.snapshots[2].board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        grow(&mut history, &[Position::Center, Position::TopLeft]);
        history.clear();
        assert_eq!(history, History::new());
    }
}
