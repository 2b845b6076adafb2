//! Rules-engine contract and the bundled placeholder engine.
//!
//! The controller and history are rules-agnostic: they only need the two
//! operations below. Real sowing, capture, and ending rules plug in
//! behind [`RulesEngine`] without touching the rest of the core.

use crate::board::{BoardState, MoveId};
use crate::error::IllegalMove;
use tracing::instrument;

/// The contract a rules engine must satisfy.
///
/// Both operations must be pure: `legal_moves` deterministic for a given
/// state, and `apply_move` yielding an equal result for an equal
/// `(state, move)` pair. The move history relies on this purity for safe
/// rewind and replay.
pub trait RulesEngine {
    /// Legal moves in `state`, in ascending pit order. An empty list
    /// signals a terminal position.
    fn legal_moves(&self, state: &BoardState) -> Vec<MoveId>;

    /// Applies `mv` to `state`, returning the successor position.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if `mv` is not in `legal_moves(state)`.
    fn apply_move(&self, state: &BoardState, mv: MoveId) -> Result<BoardState, IllegalMove>;

    /// Whether `state` has no legal continuation.
    fn is_terminal(&self, state: &BoardState) -> bool {
        self.legal_moves(state).is_empty()
    }
}

/// Selection policy for the automated opponent: picks one of the legal
/// moves, or `None` to decline.
pub trait MovePolicy {
    /// Chooses a move from `legal` for the side to move in `state`.
    fn choose(&self, state: &BoardState, legal: &[MoveId]) -> Option<MoveId>;
}

/// Placeholder policy: the first legal move in enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose(&self, _state: &BoardState, legal: &[MoveId]) -> Option<MoveId> {
        legal.first().copied()
    }
}

/// Stand-in rules used until a real engine is plugged in.
///
/// A move scoops a non-empty pit on the mover's own row straight into the
/// mover's kazan and passes the turn. No sowing, no captures - but every
/// transition conserves the seed total, so the core invariants hold for
/// any sequence of placeholder play.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoopRules;

impl RulesEngine for ScoopRules {
    fn legal_moves(&self, state: &BoardState) -> Vec<MoveId> {
        BoardState::row(state.to_move())
            .filter(|&pit| state.pit(pit).unwrap_or(0) > 0)
            .filter_map(MoveId::new)
            .collect()
    }

    #[instrument(skip(self, state), fields(side = %state.to_move()))]
    fn apply_move(&self, state: &BoardState, mv: MoveId) -> Result<BoardState, IllegalMove> {
        let side = state.to_move();
        let in_row = BoardState::row(side).contains(&mv.pit());
        let seeds = state.pit(mv.pit()).unwrap_or(0);
        if !in_row || seeds == 0 {
            return Err(IllegalMove { mv });
        }

        let mut pits = *state.pits();
        let mut stores = state.stores();
        pits[mv.pit()] = 0;
        stores[side.store_index()] += seeds;

        Ok(BoardState::from_parts(pits, stores, side.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn initial_legal_moves_are_the_bottom_row() {
        let state = BoardState::new();
        let legal = ScoopRules.legal_moves(&state);
        let pits: Vec<_> = legal.iter().map(|m| m.pit()).collect();
        assert_eq!(pits, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn top_side_moves_from_its_own_row() {
        let state = ScoopRules
            .apply_move(&BoardState::new(), MoveId::new(0).unwrap())
            .unwrap();
        assert_eq!(state.to_move(), Side::Top);
        let pits: Vec<_> = ScoopRules
            .legal_moves(&state)
            .iter()
            .map(|m| m.pit())
            .collect();
        assert_eq!(pits, (9..18).collect::<Vec<_>>());
    }

    #[test]
    fn scoop_conserves_seeds() {
        let before = BoardState::new();
        let after = ScoopRules
            .apply_move(&before, MoveId::new(3).unwrap())
            .unwrap();
        assert_eq!(after.total_seeds(), before.total_seeds());
        assert_eq!(after.pit(3), Some(0));
        assert_eq!(after.store(Side::Bottom), 9);
        // The original state is untouched.
        assert_eq!(before.pit(3), Some(9));
    }

    #[test]
    fn opponent_pit_is_rejected() {
        let state = BoardState::new();
        let err = ScoopRules
            .apply_move(&state, MoveId::new(12).unwrap())
            .unwrap_err();
        assert_eq!(err.mv.pit(), 12);
    }

    #[test]
    fn empty_pit_is_rejected() {
        let state = ScoopRules
            .apply_move(&BoardState::new(), MoveId::new(0).unwrap())
            .unwrap();
        // Bottom's pit 0 is now empty; give the turn back to Bottom.
        let state = ScoopRules
            .apply_move(&state, MoveId::new(9).unwrap())
            .unwrap();
        assert!(
            ScoopRules
                .apply_move(&state, MoveId::new(0).unwrap())
                .is_err()
        );
    }

    #[test]
    fn first_legal_picks_the_lowest_pit() {
        let state = BoardState::new();
        let legal = ScoopRules.legal_moves(&state);
        assert_eq!(FirstLegal.choose(&state, &legal), MoveId::new(0));
        assert_eq!(FirstLegal.choose(&state, &[]), None);
    }

    #[test]
    fn exhausted_row_is_terminal() {
        // Scoop all nine bottom pits (Top scoops in between to hand the
        // turn back), then Top scoops its own row dry.
        let mut state = BoardState::new();
        for pit in 0..9 {
            state = ScoopRules
                .apply_move(&state, MoveId::new(pit).unwrap())
                .unwrap();
            state = ScoopRules
                .apply_move(&state, MoveId::new(pit + 9).unwrap())
                .unwrap();
        }
        assert_eq!(state.to_move(), Side::Bottom);
        assert!(ScoopRules.is_terminal(&state));
        assert_eq!(state.total_seeds(), BoardState::new().total_seeds());
    }
}
