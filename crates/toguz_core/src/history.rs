//! Replayable move ledger with rewind-and-truncate semantics.

use crate::board::{BoardState, MoveId};
use crate::error::OutOfRange;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who originated a move, for notation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// The person clicking the board.
    Human,
    /// The automated opponent.
    Engine,
}

impl Actor {
    /// Short tag used in move notation.
    pub fn tag(self) -> &'static str {
        match self {
            Actor::Human => "P",
            Actor::Engine => "AI",
        }
    }

    /// Notation for a move by this actor, e.g. `P:3` or `AI:12`.
    pub fn notation(self, mv: MoveId) -> String {
        format!("{}:{}", self.tag(), mv.number())
    }
}

/// One completed half-move: its 1-based ply, display notation, and the
/// position it produced. The record owns its `BoardState` exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    ply: usize,
    notation: String,
    state: BoardState,
}

impl MoveRecord {
    /// 1-based ply number.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Display notation (actor tag + pit number).
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The position after this move.
    pub fn state(&self) -> &BoardState {
        &self.state
    }
}

/// Chronological ledger of moves.
///
/// Records carry dense 1-based plies (`records[i].ply == i + 1`). The
/// ledger also holds the canonical initial position, so "the state before
/// ply 1" is always answerable without consulting anyone else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveHistory {
    initial: BoardState,
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Empty ledger anchored at `initial`.
    pub fn new(initial: BoardState) -> Self {
        Self {
            initial,
            records: Vec::new(),
        }
    }

    /// Number of recorded plies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no moves have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The canonical initial position.
    pub fn initial(&self) -> &BoardState {
        &self.initial
    }

    /// All records in ply order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Appends a move at the next ply. Ownership of `state` passes to
    /// the new record.
    #[instrument(skip(self, state), fields(ply = self.records.len() + 1))]
    pub fn append(&mut self, notation: impl Into<String> + std::fmt::Debug, state: BoardState) {
        self.records.push(MoveRecord {
            ply: self.records.len() + 1,
            notation: notation.into(),
            state,
        });
    }

    /// The position after ply `ply` - the initial position for `ply == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `ply` exceeds the current length.
    pub fn rewind_to(&self, ply: usize) -> Result<&BoardState, OutOfRange> {
        match ply {
            0 => Ok(&self.initial),
            _ => self
                .records
                .get(ply - 1)
                .map(|r| &r.state)
                .ok_or(OutOfRange {
                    ply,
                    len: self.records.len(),
                }),
        }
    }

    /// Discards every record past `ply`, making it the new frontier.
    /// Idempotent; records dropped here release the only reference to
    /// their snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `ply` exceeds the current length.
    #[instrument(skip(self))]
    pub fn truncate_to(&mut self, ply: usize) -> Result<(), OutOfRange> {
        if ply > self.records.len() {
            return Err(OutOfRange {
                ply,
                len: self.records.len(),
            });
        }
        if ply < self.records.len() {
            debug!(from = self.records.len(), to = ply, "truncating history");
        }
        self.records.truncate(ply);
        Ok(())
    }

    /// The current frontier: the last recorded position, or the initial
    /// position when the ledger is empty.
    pub fn last_state(&self) -> &BoardState {
        self.records.last().map(|r| &r.state).unwrap_or(&self.initial)
    }

    /// Read-only `(ply, notation)` rows for the history table, ascending.
    pub fn as_table(&self) -> impl Iterator<Item = (usize, &str)> {
        self.records.iter().map(|r| (r.ply, r.notation.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveId;

    fn sample(len: usize) -> MoveHistory {
        let mut history = MoveHistory::new(BoardState::new());
        for i in 0..len {
            let actor = if i % 2 == 0 { Actor::Human } else { Actor::Engine };
            let mv = MoveId::new(i % 9).unwrap();
            history.append(actor.notation(mv), BoardState::with_seeds(i as u32 + 1));
        }
        history
    }

    #[test]
    fn plies_are_dense_and_one_based() {
        let history = sample(5);
        for (i, record) in history.records().iter().enumerate() {
            assert_eq!(record.ply(), i + 1);
        }
    }

    #[test]
    fn rewind_to_zero_is_the_initial_state() {
        for len in [0, 1, 4] {
            let history = sample(len);
            assert_eq!(history.rewind_to(0).unwrap(), &BoardState::new());
        }
    }

    #[test]
    fn rewind_past_the_end_fails() {
        let history = sample(3);
        let err = history.rewind_to(4).unwrap_err();
        assert_eq!(err, OutOfRange { ply: 4, len: 3 });
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn truncate_keeps_a_prefix_in_order() {
        let mut history = sample(5);
        history.truncate_to(2).unwrap();
        let table: Vec<_> = history
            .as_table()
            .map(|(ply, notation)| (ply, notation.to_string()))
            .collect();
        assert_eq!(table, vec![(1, "P:1".to_string()), (2, "AI:2".to_string())]);
    }

    #[test]
    fn truncate_is_idempotent() {
        let mut history = sample(5);
        history.truncate_to(2).unwrap();
        let snapshot = history.records().to_vec();
        history.truncate_to(2).unwrap();
        assert_eq!(history.records(), snapshot.as_slice());
    }

    #[test]
    fn truncate_past_the_end_fails_without_changes() {
        let mut history = sample(2);
        assert!(history.truncate_to(3).is_err());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn append_after_truncate_renumbers_densely() {
        let mut history = sample(5);
        history.truncate_to(2).unwrap();
        history.append("P:9", BoardState::new());
        assert_eq!(history.records().last().unwrap().ply(), 3);
    }

    #[test]
    fn last_state_tracks_the_frontier() {
        let mut history = sample(3);
        assert_eq!(history.last_state(), &BoardState::with_seeds(3));
        history.truncate_to(0).unwrap();
        assert_eq!(history.last_state(), &BoardState::new());
    }
}
