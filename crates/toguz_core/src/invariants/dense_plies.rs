//! Dense-ply invariant: history entries are numbered 1..=len with no gaps.

use super::Invariant;
use crate::history::MoveHistory;

/// Invariant: `records[i].ply == i + 1` for every entry.
///
/// Truncation followed by new moves must renumber from the frontier, so
/// the ledger never holds duplicate or skipped plies.
pub struct DensePlies;

impl Invariant<MoveHistory> for DensePlies {
    fn holds(history: &MoveHistory) -> bool {
        history
            .records()
            .iter()
            .enumerate()
            .all(|(i, record)| record.ply() == i + 1)
    }

    fn description() -> &'static str {
        "Plies are dense, 1-based, and gap-free"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;

    fn history_of(len: usize) -> MoveHistory {
        let mut history = MoveHistory::new(BoardState::new());
        for i in 0..len {
            history.append(format!("P:{}", i + 1), BoardState::new());
        }
        history
    }

    #[test]
    fn empty_history_holds() {
        assert!(DensePlies::holds(&history_of(0)));
    }

    #[test]
    fn appends_stay_dense() {
        assert!(DensePlies::holds(&history_of(6)));
    }

    #[test]
    fn truncate_then_append_stays_dense() {
        let mut history = history_of(6);
        history.truncate_to(2).unwrap();
        history.append("AI:4", BoardState::new());
        assert!(DensePlies::holds(&history));
        assert_eq!(history.records().last().unwrap().ply(), 3);
    }
}
