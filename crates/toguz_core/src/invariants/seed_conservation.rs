//! Seed conservation invariant: no transition creates or destroys seeds.

use super::Invariant;
use crate::history::MoveHistory;

/// Invariant: every recorded position carries the same seed total as the
/// initial position.
///
/// Rules engines move seeds between pits and kazans but never mint or
/// burn them, so the total is fixed at game start.
pub struct SeedConservation;

impl Invariant<MoveHistory> for SeedConservation {
    fn holds(history: &MoveHistory) -> bool {
        let total = history.initial().total_seeds();
        history
            .records()
            .iter()
            .all(|record| record.state().total_seeds() == total)
    }

    fn description() -> &'static str {
        "Every recorded position has the initial seed total"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, MoveId, Side};
    use crate::history::Actor;

    #[test]
    fn empty_history_holds() {
        let history = MoveHistory::new(BoardState::new());
        assert!(SeedConservation::holds(&history));
    }

    #[test]
    fn conserving_transition_holds() {
        let mut history = MoveHistory::new(BoardState::new());
        let mut pits = *BoardState::new().pits();
        let seeds = pits[4];
        pits[4] = 0;
        let next = BoardState::from_parts(pits, [seeds, 0], Side::Top);
        history.append(Actor::Human.notation(MoveId::new(4).unwrap()), next);
        assert!(SeedConservation::holds(&history));
    }

    #[test]
    fn leaking_transition_violates() {
        let mut history = MoveHistory::new(BoardState::new());
        let mut pits = *BoardState::new().pits();
        // Zero a pit without crediting either kazan, as the original
        // placeholder rules did.
        pits[4] = 0;
        let next = BoardState::from_parts(pits, [0, 0], Side::Top);
        history.append(Actor::Human.notation(MoveId::new(4).unwrap()), next);
        assert!(!SeedConservation::holds(&history));
    }
}
